//! Monitoring visit outcome rules.
//!
//! A recorded visit may move GPS coordinates onto its site (successful
//! planting only) and may blacklist the request's beneficiary. The blacklist
//! side effect is driven solely by the `blacklisted` flag; the result value is
//! not required to be `not_planted`.

use crate::error::CoreError;

/// Seedlings were found planted at the site.
pub const RESULT_PLANTED_SUCCESSFUL: &str = "planted_successful";

/// Seedlings were not planted.
pub const RESULT_NOT_PLANTED: &str = "not_planted";

/// All accepted visit result values.
pub const VALID_RESULTS: &[&str] = &[RESULT_PLANTED_SUCCESSFUL, RESULT_NOT_PLANTED];

/// Blacklist reason used when the visit carries no notes.
pub const DEFAULT_BLACKLIST_REASON: &str = "Seedlings not planted as per site visit";

/// Validate a visit result value.
pub fn validate_result(result: &str) -> Result<(), CoreError> {
    if VALID_RESULTS.contains(&result) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid result '{result}'. Must be one of: {}",
            VALID_RESULTS.join(", ")
        )))
    }
}

/// Validate a latitude/longitude pair when present.
pub fn validate_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Result<(), CoreError> {
    if let Some(lat) = latitude {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoreError::Validation(format!(
                "gps_latitude {lat} is out of range"
            )));
        }
    }
    if let Some(lng) = longitude {
        if !(-180.0..=180.0).contains(&lng) {
            return Err(CoreError::Validation(format!(
                "gps_longitude {lng} is out of range"
            )));
        }
    }
    Ok(())
}

/// Coordinates to write onto the visit's site, if any.
///
/// Only a `planted_successful` result with both coordinates updates the site.
pub fn site_coordinates(
    result: Option<&str>,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Option<(f64, f64)> {
    match (result, latitude, longitude) {
        (Some(RESULT_PLANTED_SUCCESSFUL), Some(lat), Some(lng)) => Some((lat, lng)),
        _ => None,
    }
}

/// Reason stored on a blacklist row.
pub fn blacklist_reason(notes: Option<&str>) -> String {
    match notes.map(str::trim) {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => DEFAULT_BLACKLIST_REASON.to_string(),
    }
}

/// Whether a blacklisting is paired with a result other than `not_planted`.
pub fn is_unpaired_blacklist(result: Option<&str>) -> bool {
    result != Some(RESULT_NOT_PLANTED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_results() {
        assert!(validate_result(RESULT_PLANTED_SUCCESSFUL).is_ok());
        assert!(validate_result(RESULT_NOT_PLANTED).is_ok());
        assert!(validate_result("planted").is_err());
    }

    #[test]
    fn coordinate_ranges() {
        assert!(validate_coordinates(Some(14.6), Some(121.0)).is_ok());
        assert!(validate_coordinates(None, None).is_ok());
        assert!(validate_coordinates(Some(91.0), None).is_err());
        assert!(validate_coordinates(None, Some(-181.0)).is_err());
    }

    #[test]
    fn site_coordinates_need_success_and_both_values() {
        assert_eq!(
            site_coordinates(Some(RESULT_PLANTED_SUCCESSFUL), Some(14.6), Some(121.0)),
            Some((14.6, 121.0))
        );
        assert_eq!(site_coordinates(Some(RESULT_PLANTED_SUCCESSFUL), Some(14.6), None), None);
        assert_eq!(site_coordinates(Some(RESULT_NOT_PLANTED), Some(14.6), Some(121.0)), None);
        assert_eq!(site_coordinates(None, Some(14.6), Some(121.0)), None);
    }

    #[test]
    fn blacklist_reason_falls_back() {
        assert_eq!(blacklist_reason(None), DEFAULT_BLACKLIST_REASON);
        assert_eq!(blacklist_reason(Some("  ")), DEFAULT_BLACKLIST_REASON);
        assert_eq!(blacklist_reason(Some("Site abandoned")), "Site abandoned");
    }

    #[test]
    fn unpaired_blacklist_detection() {
        assert!(!is_unpaired_blacklist(Some(RESULT_NOT_PLANTED)));
        assert!(is_unpaired_blacklist(Some(RESULT_PLANTED_SUCCESSFUL)));
        assert!(is_unpaired_blacklist(None));
    }
}
