use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Principal role. Fixed per session; `Guest` stands for the anonymous
/// visitor and is never issued by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    CollegeAdmin,
    Student,
    #[default]
    Guest,
}

impl Role {
    /// Whether this role represents a logged-in principal.
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Role::Guest)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::CollegeAdmin => "college_admin",
            Role::Student => "student",
            Role::Guest => "guest",
        }
    }

    /// Parse the backend's lowercase role string. Unknown values map to
    /// `None` rather than panicking; callers decide the fallback.
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            "college_admin" => Some(Role::CollegeAdmin),
            "student" => Some(Role::Student),
            "guest" => Some(Role::Guest),
            _ => None,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_matches_backend_strings() {
        assert_eq!(serde_json::to_string(&Role::CollegeAdmin).unwrap(), "\"college_admin\"");
        let role: Role = serde_json::from_str("\"student\"").unwrap();
        assert_eq!(role, Role::Student);
    }

    #[test]
    fn from_str_round_trips_and_rejects_unknown() {
        for role in [Role::Admin, Role::CollegeAdmin, Role::Student, Role::Guest] {
            assert_eq!(Role::from_str(role.as_str()), Some(role));
        }
        assert_eq!(Role::from_str("superuser"), None);
    }

    #[test]
    fn only_guest_is_unauthenticated() {
        assert!(!Role::Guest.is_authenticated());
        assert!(Role::Student.is_authenticated());
        assert!(Role::CollegeAdmin.is_authenticated());
        assert!(Role::Admin.is_authenticated());
    }
}
