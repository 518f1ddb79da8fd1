use serde::{Deserialize, Serialize};

mod role;

pub use role::Role;

// =========================================================
// Constants
// =========================================================

pub const API_COLLEGES: &str = "/api/colleges";
pub const API_SIGNUP: &str = "/api/auth/signup";
pub const API_LOGIN: &str = "/api/auth/login";
pub const API_PROFILE: &str = "/api/profile";

// =========================================================
// Domain models
// =========================================================

/// A participating college. The email domain is the eligibility key for
/// signup: only addresses under it may register against this college.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct College {
    #[serde(rename = "ID")]
    pub id: u32,
    pub name: String,
    pub domain: String,
}

/// Current user as reported by the profile endpoint after login.
/// The session itself lives in an HttpOnly cookie the client never reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub college_id: Option<u32>,
}

// =========================================================
// Request / response envelopes
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub college_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// List payloads arrive wrapped in a `data` envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiListResponse<T> {
    pub data: Vec<T>,
}

/// Structured failure body. Any endpoint may answer with this on a
/// non-2xx status; `error` is a human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn college_uses_upstream_field_names() {
        let json = r#"{"ID": 3, "Name": "IIIT Nagpur", "Domain": "iiitn.ac.in"}"#;
        let college: College = serde_json::from_str(json).unwrap();
        assert_eq!(college.id, 3);
        assert_eq!(college.name, "IIIT Nagpur");
        assert_eq!(college.domain, "iiitn.ac.in");
    }

    #[test]
    fn college_list_unwraps_data_envelope() {
        let json = r#"{"data": [{"ID": 1, "Name": "A", "Domain": "a.edu"}]}"#;
        let list: ApiListResponse<College> = serde_json::from_str(json).unwrap();
        assert_eq!(list.data.len(), 1);
        assert_eq!(list.data[0].domain, "a.edu");
    }

    #[test]
    fn signup_request_serializes_snake_case() {
        let req = SignupRequest {
            name: "Student".to_string(),
            email: "s@college.edu".to_string(),
            password: "Secret123!".to_string(),
            college_id: 7,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["college_id"], 7);
        assert_eq!(json["email"], "s@college.edu");
    }

    #[test]
    fn profile_tolerates_extra_fields() {
        let json = r#"{
            "id": 5, "name": "S", "email": "s@a.edu", "role": "student",
            "college_id": 1, "profile_complete": false, "cgpa": null
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.role, Role::Student);
        assert_eq!(profile.college_id, Some(1));
    }
}
