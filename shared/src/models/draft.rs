//! Draft Registration Model

use serde::{Deserialize, Serialize};

/// Unsubmitted quick-add registration kept in local storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRegistration {
    /// `"<employee number>-<unix millis>"`
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub role_title: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
}

impl DraftRegistration {
    /// First name and remainder, split on the first space
    pub fn split_name(&self) -> (&str, &str) {
        match self.name.split_once(' ') {
            Some((first, last)) => (first, last),
            None => (self.name.as_str(), ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> DraftRegistration {
        DraftRegistration {
            id: "TPT-0001-1700000000000".into(),
            name: name.into(),
            department: None,
            role_title: None,
            branch: None,
        }
    }

    #[test]
    fn test_split_name() {
        assert_eq!(draft("Mary Atieno Otieno").split_name(), ("Mary", "Atieno Otieno"));
        assert_eq!(draft("Kamau").split_name(), ("Kamau", ""));
    }

    #[test]
    fn test_draft_tolerates_missing_fields() {
        let d: DraftRegistration = serde_json::from_str(r#"{"id":"x","name":"A B"}"#).unwrap();
        assert!(d.department.is_none());
    }
}
