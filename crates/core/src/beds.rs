//! Bed catalogue rules: species categories, QR code defaults, occupancy.

use crate::error::CoreError;

pub const CATEGORY_FRUIT_TREE: &str = "Fruit Tree";
pub const CATEGORY_FORESTRY: &str = "Forestry";
pub const CATEGORY_ORNAMENTAL: &str = "Ornamental";

/// All accepted bed species categories.
pub const VALID_CATEGORIES: &[&str] = &[CATEGORY_FRUIT_TREE, CATEGORY_FORESTRY, CATEGORY_ORNAMENTAL];

pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if VALID_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(CoreError::Validation("Invalid species category".into()))
    }
}

pub fn validate_capacity(capacity: Option<i32>) -> Result<(), CoreError> {
    match capacity {
        Some(c) if c < 0 => Err(CoreError::Validation(
            "capacity must not be negative".into(),
        )),
        _ => Ok(()),
    }
}

/// Default QR code printed on a bed tag, e.g. `BED-A1-QR2024`.
///
/// The bed name is upper-cased and anything other than ASCII alphanumerics
/// collapses to single dashes.
pub fn default_qr_code(bed_name: &str, year: i32) -> String {
    let mut slug = String::with_capacity(bed_name.len());
    for ch in bed_name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_uppercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');
    format!("BED-{slug}-QR{year}")
}

/// Occupancy as a percentage of capacity, rounded to two decimals.
///
/// `None` when capacity is unknown or zero.
pub fn occupancy_percentage(current: i32, capacity: Option<i32>) -> Option<f64> {
    match capacity {
        Some(cap) if cap > 0 => Some(round2(f64::from(current) / f64::from(cap) * 100.0)),
        _ => None,
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories() {
        for c in VALID_CATEGORIES {
            assert!(validate_category(c).is_ok());
        }
        assert!(validate_category("Vegetable").is_err());
        assert!(validate_category("forestry").is_err());
    }

    #[test]
    fn capacity_may_be_absent() {
        assert!(validate_capacity(None).is_ok());
        assert!(validate_capacity(Some(0)).is_ok());
        assert!(validate_capacity(Some(-1)).is_err());
    }

    #[test]
    fn qr_code_from_name() {
        assert_eq!(default_qr_code("A1", 2024), "BED-A1-QR2024");
        assert_eq!(default_qr_code(" north bed #2 ", 2025), "BED-NORTH-BED-2-QR2025");
    }

    #[test]
    fn occupancy_rounding() {
        assert_eq!(occupancy_percentage(1, Some(3)), Some(33.33));
        assert_eq!(occupancy_percentage(150, Some(200)), Some(75.0));
        assert_eq!(occupancy_percentage(10, Some(0)), None);
        assert_eq!(occupancy_percentage(10, None), None);
    }
}
