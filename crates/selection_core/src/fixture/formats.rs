//! Match-format lookup tables.
//!
//! The fixture definition names a format ("7-a-side", ...); the format
//! determines the default position-slot layout and the default half length.
//! Unknown formats fall back to the 7-a-side layout.

use crate::models::PositionCode;

/// Default formation slots for a format, goalkeeper first.
pub fn format_layout(format: &str) -> &'static [&'static str] {
    match normalize(format).as_str() {
        "4ASIDE" | "4" => &["GK", "DC", "MC", "ST"],
        "5ASIDE" | "5" => &["GK", "DL", "DR", "MC", "ST"],
        "7ASIDE" | "7" => &["GK", "DL", "DC", "DR", "ML", "MC", "MR"],
        "9ASIDE" | "9" => &["GK", "DL", "DCL", "DCR", "DR", "ML", "MC", "MR", "ST"],
        "11ASIDE" | "11" => {
            &["GK", "DL", "DCL", "DCR", "DR", "ML", "MCL", "MCR", "MR", "STL", "STR"]
        }
        _ => &["GK", "DL", "DC", "DR", "ML", "MC", "MR"],
    }
}

/// Default half duration in minutes for a format.
pub fn default_half_duration(format: &str) -> u32 {
    match normalize(format).as_str() {
        "4ASIDE" | "4" => 10,
        "5ASIDE" | "5" => 20,
        "9ASIDE" | "9" => 30,
        "11ASIDE" | "11" => 45,
        _ => 25,
    }
}

/// Typed layout for a format.
pub fn layout_codes(format: &str) -> Vec<PositionCode> {
    format_layout(format).iter().map(PositionCode::new).collect()
}

fn normalize(format: &str) -> String {
    format
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_a_side_layout() {
        assert_eq!(format_layout("7-a-side"), &["GK", "DL", "DC", "DR", "ML", "MC", "MR"]);
        assert_eq!(format_layout("7 a side"), format_layout("7-A-SIDE"));
    }

    #[test]
    fn unknown_format_falls_back() {
        assert_eq!(format_layout("futsal-deluxe"), format_layout("7-a-side"));
        assert_eq!(default_half_duration("futsal-deluxe"), 25);
    }

    #[test]
    fn layouts_start_with_the_goalkeeper() {
        for format in ["4-a-side", "5-a-side", "7-a-side", "9-a-side", "11-a-side"] {
            assert_eq!(format_layout(format)[0], "GK");
        }
    }

    #[test]
    fn durations_stay_inside_the_period_bounds() {
        for format in ["4-a-side", "5-a-side", "7-a-side", "9-a-side", "11-a-side"] {
            let minutes = default_half_duration(format);
            assert!(crate::models::Period::duration_in_range(minutes));
        }
    }
}
