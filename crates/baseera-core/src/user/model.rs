//! User identity model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// An authenticated user's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Job title, shown under the name in the sidebar
    pub role: String,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub permissions: BTreeSet<String>,
}

impl User {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    /// Initials used in place of a missing avatar.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// Returns the fixed identity assigned on login.
pub fn default_user() -> User {
    User {
        id: "usr_001".to_string(),
        name: "أحمد محمد العتيبي".to_string(),
        email: "ahmed.otaibi@example.gov.sa".to_string(),
        role: "محلل قرارات أول".to_string(),
        department: "إدارة التخطيط الاستراتيجي".to_string(),
        avatar: None,
        permissions: ["analyze", "view_cases", "export_reports", "manage_settings"]
            .into_iter()
            .map(String::from)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user() {
        let user = default_user();
        assert_eq!(user.id, "usr_001");
        assert!(!user.name.is_empty());
        assert!(user.has_permission("analyze"));
        assert!(!user.has_permission("delete_everything"));
    }

    #[test]
    fn test_initials() {
        let user = default_user();
        assert_eq!(user.initials(), "أم");
    }
}
