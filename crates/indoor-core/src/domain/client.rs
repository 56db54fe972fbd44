//! Client Entity
//!
//! A gym member. The API has served the membership flag as both
//! `membershipStatus` and `membershipstatus`; both are accepted.

use serde::{Deserialize, Serialize};

use super::entity::{impl_entity, RecordId};

/// Client's active/inactive flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    #[default]
    #[serde(alias = "activo")]
    Active,
    #[serde(alias = "inactivo")]
    Inactive,
}

impl MembershipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipStatus::Active => "active",
            MembershipStatus::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MembershipStatus::Active => "Activo",
            MembershipStatus::Inactive => "Inactivo",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" | "activo" => Some(MembershipStatus::Active),
            "inactive" | "inactivo" => Some(MembershipStatus::Inactive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(default, alias = "_id", skip_serializing_if = "RecordId::is_empty")]
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(
        rename = "membershipStatus",
        alias = "membershipstatus",
        alias = "membership_status",
        default
    )]
    pub membership_status: MembershipStatus,
    /// Number of bikes registered to the client
    #[serde(default)]
    pub bikes: u32,
}

impl Client {
    pub fn is_active(&self) -> bool {
        self.membership_status == MembershipStatus::Active
    }
}

impl_entity!(Client);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_both_membership_casings() {
        let camel: Client = serde_json::from_str(
            r#"{"id":"1","name":"John Doe","email":"john@example.com","phone":"+1234567890","membershipStatus":"active","bikes":2}"#,
        )
        .unwrap();
        let lower: Client = serde_json::from_str(
            r#"{"id":2,"name":"Jane Smith","email":"jane@example.com","membershipstatus":"inactive"}"#,
        )
        .unwrap();

        assert!(camel.is_active());
        assert_eq!(camel.bikes, 2);
        assert_eq!(lower.membership_status, MembershipStatus::Inactive);
        assert_eq!(lower.id.as_str(), "2");
        assert_eq!(lower.bikes, 0);
    }

    #[test]
    fn test_new_client_omits_empty_id() {
        let client = Client {
            id: RecordId::default(),
            name: "Mike".into(),
            email: "mike@example.com".into(),
            phone: String::new(),
            membership_status: MembershipStatus::Active,
            bikes: 0,
        };
        let json = serde_json::to_value(&client).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["membershipStatus"], "active");
    }
}
