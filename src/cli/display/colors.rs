//! Colour handling for list names and overdue dates.
//!
//! Styling via the `colored` crate respects `NO_COLOR`/`CLICOLOR` and
//! terminal detection automatically.

use colored::Colorize;

/// Resets all SGR attributes.
pub const RESET: &str = "\x1b[0m";

/// Convert a `#RRGGBB` colour into a truecolor foreground escape.
///
/// Anything else (missing `#`, short input, non-hex digits) yields `None`.
/// Characters after the sixth hex digit are ignored.
pub fn rgb_to_ansi(colour: Option<&str>) -> Option<String> {
    let colour = colour?;
    if !colour.starts_with('#') {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| -> Option<u8> {
        let digits = colour.get(range)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u8::from_str_radix(digits, 16).ok()
    };

    let (r, g, b) = (channel(1..3)?, channel(3..5)?, channel(5..7)?);
    Some(format!("\x1b[38;2;{r};{g};{b}m"))
}

/// Whether escape sequences should be written at all.
pub fn colors_enabled() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}

/// Highlight text that is past due.
pub fn overdue(text: &str) -> String {
    text.red().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_colour() {
        assert_eq!(
            rgb_to_ansi(Some("#ff8000")).as_deref(),
            Some("\x1b[38;2;255;128;0m")
        );
        assert_eq!(
            rgb_to_ansi(Some("#0A0b0C")).as_deref(),
            Some("\x1b[38;2;10;11;12m")
        );
    }

    #[test]
    fn test_trailing_characters_ignored() {
        assert_eq!(
            rgb_to_ansi(Some("#000000ff")).as_deref(),
            Some("\x1b[38;2;0;0;0m")
        );
    }

    #[test]
    fn test_malformed_colours() {
        assert_eq!(rgb_to_ansi(None), None);
        assert_eq!(rgb_to_ansi(Some("")), None);
        assert_eq!(rgb_to_ansi(Some("ff8000")), None);
        assert_eq!(rgb_to_ansi(Some("#ff80")), None);
        assert_eq!(rgb_to_ansi(Some("#abc")), None);
        assert_eq!(rgb_to_ansi(Some("#gg0000")), None);
        assert_eq!(rgb_to_ansi(Some("#+f0000")), None);
        assert_eq!(rgb_to_ansi(Some("#é00000")), None);
    }

    #[test]
    fn test_overdue_is_red_when_forced() {
        colored::control::set_override(true);
        assert_eq!(overdue("2024-03-01"), "\x1b[31m2024-03-01\x1b[0m");
    }

    proptest! {
        #[test]
        fn decodes_any_valid_triplet(r: u8, g: u8, b: u8) {
            let hex = format!("#{r:02x}{g:02x}{b:02x}");
            let expected = format!("\x1b[38;2;{r};{g};{b}m");
            prop_assert_eq!(rgb_to_ansi(Some(hex.as_str())), Some(expected));
        }

        #[test]
        fn rejects_missing_hash(s in "[0-9a-f]{6}") {
            prop_assert_eq!(rgb_to_ansi(Some(s.as_str())), None);
        }

        #[test]
        fn rejects_short_input(s in "#[0-9a-f]{0,5}") {
            prop_assert_eq!(rgb_to_ansi(Some(s.as_str())), None);
        }
    }
}
