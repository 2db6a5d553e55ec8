//! Plain table layout on top of comfy-table.

use comfy_table::{presets, CellAlignment, ContentArrangement, Table};

/// Spaces between adjacent columns.
const COLUMN_GAP: u16 = 2;

/// Lay out rows as aligned columns with no borders and no header.
///
/// Columns listed in `right_aligned` are right-justified. Trailing
/// whitespace is stripped from every line; an empty row set renders as "".
pub fn plain_table<R, C>(rows: R, right_aligned: &[usize]) -> String
where
    R: IntoIterator<Item = Vec<C>>,
    C: Into<String>,
{
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled);

    let mut row_count = 0;
    for row in rows {
        table.add_row(row.into_iter().map(Into::into).collect::<Vec<String>>());
        row_count += 1;
    }
    if row_count == 0 {
        return String::new();
    }

    for column in table.column_iter_mut() {
        column.set_padding((0, COLUMN_GAP));
    }
    for &index in right_aligned {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table
        .to_string()
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}
