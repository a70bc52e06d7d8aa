//! Shared API response types.

use serde::Deserialize;

use crate::types::User;

/// Top-level response from the random-user API.
///
/// A successful response carries `results` and `info`; a failing one carries
/// a single `error` string instead.
#[derive(Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub results: Vec<User>,
    pub info: Option<PageInfo>,
    pub error: Option<String>,
}

/// Pagination echo attached to every successful response.
#[derive(Deserialize)]
#[allow(dead_code)]
pub struct PageInfo {
    pub seed: String,
    pub results: u32,
    pub page: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_payload() {
        let payload = r#"{
            "results": [{
                "name": {"first": "Jordi", "last": "Dominguez"},
                "email": "jordi.dominguez@example.com",
                "dob": {"date": "1990-01-15T08:30:00.000Z"},
                "phone": "912-383-407",
                "login": {"uuid": "a1b2c3", "username": "bluefrog512"},
                "picture": {"medium": "https://example.com/med.jpg"}
            }],
            "info": {"seed": "abc123", "results": 8, "page": 2, "version": "1.4"}
        }"#;

        let response: ApiResponse = serde_json::from_str(payload).unwrap();
        assert!(response.error.is_none());
        assert_eq!(response.results.len(), 1);
        let info = response.info.unwrap();
        assert_eq!(info.page, 2);
        assert_eq!(info.results, 8);
    }

    #[test]
    fn test_parse_error_payload() {
        let payload = r#"{"error": "Uh oh, something has gone wrong."}"#;
        let response: ApiResponse = serde_json::from_str(payload).unwrap();
        assert!(response.results.is_empty());
        assert_eq!(
            response.error.as_deref(),
            Some("Uh oh, something has gone wrong.")
        );
    }
}
