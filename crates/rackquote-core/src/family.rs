use serde::{Deserialize, Serialize};
use std::fmt;

///
/// CpuFamily
///
/// The platform family a chassis qualifies against. Chassis rows carry
/// family tags as strings, so [`fmt::Display`] must render exactly the
/// catalog spellings.
///
/// Derivation from a model string is a heuristic over marketing names and
/// is deliberately confined to [`CpuFamily::classify`] so it can be tested
/// in isolation from compatibility logic.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum CpuFamily {
    Epyc7002,
    Epyc7003,
    Unknown,
    XeonE5,
    XeonGold,
}

impl CpuFamily {
    /// Classify a CPU model string.
    ///
    /// EPYC models encode the family in the 4th digit of the model
    /// number ("7713" → generation 3 → EPYC 7003). A model number with
    /// fewer than four digits, or an unrecognized generation digit,
    /// classifies as `Unknown`; such a CPU can never pass a chassis
    /// family check.
    #[must_use]
    pub fn classify(model: &str) -> Self {
        if model.contains("EPYC") {
            return match first_digit_run(model).as_bytes().get(3) {
                Some(b'2') => Self::Epyc7002,
                Some(b'3') => Self::Epyc7003,
                _ => Self::Unknown,
            };
        }

        if model.contains("Gold") {
            Self::XeonGold
        } else if model.contains("E5") {
            Self::XeonE5
        } else {
            Self::Unknown
        }
    }

    /// The catalog tag string chassis rows reference.
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Epyc7002 => "EPYC 7002",
            Self::Epyc7003 => "EPYC 7003",
            Self::Unknown => "Unknown",
            Self::XeonE5 => "Xeon E5",
            Self::XeonGold => "Xeon Gold",
        }
    }
}

impl fmt::Display for CpuFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// First contiguous run of ASCII digits in `model`, or empty.
fn first_digit_run(model: &str) -> &str {
    let Some(start) = model.find(|c: char| c.is_ascii_digit()) else {
        return "";
    };
    let rest = &model[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    &rest[..end]
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epyc_generation_is_read_from_the_fourth_digit() {
        assert_eq!(CpuFamily::classify("EPYC 7302"), CpuFamily::Epyc7002);
        assert_eq!(CpuFamily::classify("EPYC 7713"), CpuFamily::Epyc7003);
        assert_eq!(CpuFamily::classify("AMD EPYC 7543P"), CpuFamily::Epyc7003);
    }

    #[test]
    fn epyc_with_unrecognized_generation_digit_is_unknown() {
        assert_eq!(CpuFamily::classify("EPYC 9654"), CpuFamily::Unknown);
        assert_eq!(CpuFamily::classify("EPYC 7H12"), CpuFamily::Unknown);
    }

    #[test]
    fn epyc_without_a_model_number_is_unknown() {
        assert_eq!(CpuFamily::classify("EPYC"), CpuFamily::Unknown);
    }

    #[test]
    fn xeon_families_match_on_substring() {
        assert_eq!(CpuFamily::classify("Xeon Gold 6248R"), CpuFamily::XeonGold);
        assert_eq!(CpuFamily::classify("Xeon E5-2680 v4"), CpuFamily::XeonE5);
    }

    #[test]
    fn anything_else_is_unknown() {
        assert_eq!(CpuFamily::classify("Ryzen 9 7950X"), CpuFamily::Unknown);
        assert_eq!(CpuFamily::classify(""), CpuFamily::Unknown);
    }

    #[test]
    fn display_matches_catalog_tags() {
        assert_eq!(CpuFamily::Epyc7003.to_string(), "EPYC 7003");
        assert_eq!(CpuFamily::XeonGold.to_string(), "Xeon Gold");
        assert_eq!(CpuFamily::Unknown.to_string(), "Unknown");
    }
}
