//! Display primitives shared by the output modes.
//!
//! Colour escapes for lists and overdue dates, plus the borderless table
//! layout used for todo rows and detail sections.

pub mod colors;
pub mod table;

pub use colors::*;
pub use table::*;
