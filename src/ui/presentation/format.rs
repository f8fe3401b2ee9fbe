//! Display formatting for detail records.
//!
//! Absent attributes render the localized "no information" placeholder rather
//! than failing; the API stores height in decimeters and weight in
//! hectograms, so both divide by ten for display.

use crate::domain::StatSlot;

/// Placeholder shown wherever a detail field is missing.
pub const NO_INFORMATION: &str = "Sin información";

/// First letter uppercased, rest untouched. API names are lowercase.
pub fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Zero-padded 3-digit dex number, e.g. `#025`.
pub fn format_dex_number(id: u32) -> String {
    format!("#{id:03}")
}

/// Decimeters to meters, one decimal.
pub fn format_height(height: Option<u32>) -> String {
    match height {
        Some(dm) => format!("{:.1}m", dm as f64 / 10.0),
        None => NO_INFORMATION.to_string(),
    }
}

/// Hectograms to kilograms, one decimal.
pub fn format_weight(weight: Option<u32>) -> String {
    match weight {
        Some(hg) => format!("{:.1}kg", hg as f64 / 10.0),
        None => NO_INFORMATION.to_string(),
    }
}

pub fn format_base_experience(base_experience: Option<u32>) -> String {
    match base_experience {
        Some(xp) => xp.to_string(),
        None => NO_INFORMATION.to_string(),
    }
}

/// Bar width for a base stat, as a percentage of the 255 ceiling.
pub fn stat_bar_width(stat: &StatSlot) -> f64 {
    (stat.base_stat as f64 / 255.0) * 100.0
}

/// Green for outstanding stats, blue otherwise.
pub fn stat_bar_color(stat: &StatSlot) -> &'static str {
    if stat.base_stat > 100 {
        "#28a745"
    } else {
        "#007bff"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NamedResource;

    fn stat(value: u32) -> StatSlot {
        StatSlot {
            base_stat: value,
            stat: NamedResource { name: "hp".to_string() },
        }
    }

    mod title_case_tests {
        use super::*;

        #[test]
        fn capitalizes_the_first_letter() {
            assert_eq!(title_case("pikachu"), "Pikachu");
        }

        #[test]
        fn leaves_the_rest_alone() {
            assert_eq!(title_case("mr-mime"), "Mr-mime");
        }

        #[test]
        fn empty_stays_empty() {
            assert_eq!(title_case(""), "");
        }
    }

    mod number_format_tests {
        use super::*;

        #[test]
        fn pads_to_three_digits() {
            assert_eq!(format_dex_number(1), "#001");
            assert_eq!(format_dex_number(25), "#025");
            assert_eq!(format_dex_number(150), "#150");
        }

        #[test]
        fn four_digit_ids_keep_all_digits() {
            assert_eq!(format_dex_number(1025), "#1025");
        }
    }

    mod attribute_format_tests {
        use super::*;

        #[test]
        fn height_converts_decimeters_to_meters() {
            assert_eq!(format_height(Some(4)), "0.4m");
            assert_eq!(format_height(Some(17)), "1.7m");
        }

        #[test]
        fn weight_converts_hectograms_to_kilograms() {
            assert_eq!(format_weight(Some(60)), "6.0kg");
            assert_eq!(format_weight(Some(905)), "90.5kg");
        }

        #[test]
        fn missing_attributes_fall_back_to_the_placeholder() {
            assert_eq!(format_height(None), NO_INFORMATION);
            assert_eq!(format_weight(None), NO_INFORMATION);
            assert_eq!(format_base_experience(None), NO_INFORMATION);
        }

        #[test]
        fn base_experience_renders_plain() {
            assert_eq!(format_base_experience(Some(112)), "112");
        }
    }

    mod stat_bar_tests {
        use super::*;

        #[test]
        fn width_is_the_fraction_of_the_ceiling() {
            assert_eq!(stat_bar_width(&stat(0)), 0.0);
            assert_eq!(stat_bar_width(&stat(255)), 100.0);
            assert!((stat_bar_width(&stat(51)) - 20.0).abs() < 1e-9);
        }

        #[test]
        fn color_flips_to_green_above_one_hundred() {
            assert_eq!(stat_bar_color(&stat(100)), "#007bff");
            assert_eq!(stat_bar_color(&stat(101)), "#28a745");
        }
    }
}
