//! Priority bands on the 0-9 scale.
//!
//! 0 means "no priority", 1 is the most urgent and 9 the least. Symbolic
//! names parse to a representative value inside their band; formatting
//! classifies any value in the band.

use serde::{Deserialize, Serialize};

use crate::domain::errors::{FormatError, FormatResult};

/// The four bands a 0-9 priority falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityBand {
    /// 0 or unset.
    None,
    /// 1-4.
    High,
    /// 5.
    Medium,
    /// 6-9.
    Low,
}

impl PriorityBand {
    /// Classify a raw priority. Values above 9 are treated as low.
    pub const fn from_value(priority: Option<u8>) -> Self {
        match priority {
            None | Some(0) => Self::None,
            Some(1..=4) => Self::High,
            Some(5) => Self::Medium,
            Some(_) => Self::Low,
        }
    }

    /// Look up a band by its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(Self::None),
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    /// Lowercase band name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// The value a symbolic name parses to.
    pub const fn representative(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::High => 4,
            Self::Medium => 5,
            Self::Low => 9,
        }
    }

    /// Compact marker: more glyphs, more urgent.
    pub const fn glyphs(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::High => "!!!",
            Self::Medium => "!!",
            Self::Low => "!",
        }
    }
}

/// Parse a symbolic priority name. Empty input means "not given".
pub fn parse_priority(text: Option<&str>) -> FormatResult<Option<u8>> {
    match text {
        None | Some("") => Ok(None),
        Some(name) => PriorityBand::from_name(name)
            .map(|band| Some(band.representative()))
            .ok_or_else(|| FormatError::InvalidPriority(name.to_string())),
    }
}

/// Band name for a raw priority.
pub const fn format_priority(priority: Option<u8>) -> &'static str {
    PriorityBand::from_value(priority).as_str()
}

/// `!!!`, `!!`, `!` or nothing.
pub const fn format_priority_compact(priority: Option<u8>) -> &'static str {
    PriorityBand::from_value(priority).glyphs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_symbolic_names() {
        assert_eq!(parse_priority(Some("none")).unwrap(), Some(0));
        assert_eq!(parse_priority(Some("high")).unwrap(), Some(4));
        assert_eq!(parse_priority(Some("medium")).unwrap(), Some(5));
        assert_eq!(parse_priority(Some("low")).unwrap(), Some(9));
    }

    #[test]
    fn test_parse_empty_is_absent() {
        assert_eq!(parse_priority(None).unwrap(), None);
        assert_eq!(parse_priority(Some("")).unwrap(), None);
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = parse_priority(Some("urgent")).unwrap_err();
        assert!(matches!(err, FormatError::InvalidPriority(ref s) if s == "urgent"));
        assert!(err.to_string().contains("low, medium, high or none"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(parse_priority(Some("HIGH")).is_err());
    }

    #[test]
    fn test_format_bands() {
        assert_eq!(format_priority(None), "none");
        assert_eq!(format_priority(Some(0)), "none");
        for p in 1..=4 {
            assert_eq!(format_priority(Some(p)), "high");
        }
        assert_eq!(format_priority(Some(5)), "medium");
        for p in 6..=9 {
            assert_eq!(format_priority(Some(p)), "low");
        }
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_priority_compact(None), "");
        assert_eq!(format_priority_compact(Some(0)), "");
        assert_eq!(format_priority_compact(Some(1)), "!!!");
        assert_eq!(format_priority_compact(Some(5)), "!!");
        assert_eq!(format_priority_compact(Some(9)), "!");
    }

    #[test]
    fn test_name_round_trip() {
        for name in ["none", "high", "medium", "low"] {
            let value = parse_priority(Some(name)).unwrap();
            assert_eq!(format_priority(value), name);
        }
    }

    proptest! {
        #[test]
        fn compact_glyphs_never_increase(p in 1u8..9) {
            let here = format_priority_compact(Some(p)).len();
            let next = format_priority_compact(Some(p + 1)).len();
            prop_assert!(next <= here);
        }

        #[test]
        fn band_name_matches_glyphs(p in 0u8..=9) {
            let band = PriorityBand::from_value(Some(p));
            prop_assert_eq!(format_priority(Some(p)), band.as_str());
            prop_assert_eq!(format_priority_compact(Some(p)), band.glyphs());
        }
    }
}
