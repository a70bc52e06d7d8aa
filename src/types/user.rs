use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single user record as returned by the random-user API.
///
/// Only the fields the application displays are modelled; everything else in
/// the API payload is ignored on deserialization. The same shape is written
/// back to the local cache, so the persisted list is exactly the in-memory
/// list.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub name: Name,
    pub email: String,
    pub dob: Dob,
    pub phone: String,
    pub login: Login,
    pub picture: Picture,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Name {
    pub first: String,
    pub last: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Dob {
    pub date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Login {
    pub username: String,
    pub uuid: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Picture {
    pub medium: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }

    /// Date of birth formatted as dd/mm/yyyy.
    pub fn born(&self) -> String {
        self.dob.date.format("%d/%m/%Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "gender": "female",
        "name": {"title": "Ms", "first": "Ida", "last": "Kristensen"},
        "email": "ida.kristensen@example.com",
        "dob": {"date": "1982-09-25T16:57:22.444Z", "age": 43},
        "phone": "23371993",
        "login": {
            "uuid": "5f2bb77c-c9b9-4f6b-9d37-c3e4b8e9a630",
            "username": "smallbutterfly906"
        },
        "picture": {
            "large": "https://randomuser.me/api/portraits/women/26.jpg",
            "medium": "https://randomuser.me/api/portraits/med/women/26.jpg",
            "thumbnail": "https://randomuser.me/api/portraits/thumb/women/26.jpg"
        },
        "nat": "DK"
    }"#;

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let user: User = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(user.email, "ida.kristensen@example.com");
        assert_eq!(user.login.username, "smallbutterfly906");
        assert_eq!(
            user.picture.medium,
            "https://randomuser.me/api/portraits/med/women/26.jpg"
        );
    }

    #[test]
    fn test_full_name() {
        let user: User = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(user.full_name(), "Ida Kristensen");
    }

    #[test]
    fn test_born_formats_en_gb() {
        let user: User = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(user.born(), "25/09/1982");
    }

    #[test]
    fn test_cache_round_trip() {
        let user: User = serde_json::from_str(SAMPLE).unwrap();
        let json = serde_json::to_string(&vec![user]).unwrap();
        let back: Vec<User> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].full_name(), "Ida Kristensen");
        assert_eq!(back[0].born(), "25/09/1982");
    }
}
