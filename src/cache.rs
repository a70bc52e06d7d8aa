use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Result;
use crate::types::User;

/// Local mirror of the accumulated user list.
///
/// Serialized as the bare JSON array so the file holds exactly what the
/// in-memory list holds. Loading is forgiving: a missing or corrupt file
/// yields an empty list and the application carries on. Saving reports its
/// failure so callers can surface it without halting.
#[derive(Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn load() -> Self {
        match Self::store_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::store_path()?)
    }

    pub fn clear() -> Result<()> {
        let path = Self::store_path()?;
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }

    pub fn store_path() -> Result<PathBuf> {
        Ok(Config::config_path()?.with_file_name("users.json"))
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };

        serde_json::from_str(&contents).unwrap_or_default()
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string(&self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn into_users(self) -> Vec<User> {
        self.users
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_users() -> Vec<User> {
        serde_json::from_str(
            r#"[{
                "name": {"first": "Ida", "last": "Kristensen"},
                "email": "ida.kristensen@example.com",
                "dob": {"date": "1982-09-25T16:57:22.444Z"},
                "phone": "23371993",
                "login": {"uuid": "5f2bb77c", "username": "smallbutterfly906"},
                "picture": {"medium": "https://example.com/med.jpg"}
            }]"#,
        )
        .unwrap()
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("userdeck-test-{name}-{}", std::process::id()))
    }

    #[test]
    fn test_round_trip() {
        let path = temp_path("round-trip");
        let store = UserStore::new(sample_users());
        store.save_to(&path).unwrap();

        let loaded = UserStore::load_from(&path);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.users()[0].full_name(), "Ida Kristensen");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_serializes_as_bare_list() {
        let store = UserStore::new(sample_users());
        let json = serde_json::to_string(&store).unwrap();
        assert!(json.starts_with('['));
        assert!(json.ends_with(']'));
    }

    #[test]
    fn test_missing_file_yields_empty() {
        let store = UserStore::load_from(Path::new("/nonexistent/userdeck/users.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_corrupt_file_yields_empty() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "{not json").unwrap();

        let store = UserStore::load_from(&path);
        assert!(store.is_empty());

        let _ = std::fs::remove_file(&path);
    }
}
