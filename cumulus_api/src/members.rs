use core::fmt;
use std::collections::BTreeMap;

use cumulus_core::{append_parameter, Client, Error, PageParams, Transport};
use serde::{Deserialize, Serialize};

use crate::roles::Role;
use crate::shared::{Id, Key};

/// Membership state of a user in an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MemberStatus {
    #[serde(rename = "accepted")]
    Accepted,
    #[default]
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "rejected")]
    Rejected,
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberStatus::Accepted => f.write_str("accepted"),
            MemberStatus::Pending => f.write_str("pending"),
            MemberStatus::Rejected => f.write_str("rejected"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub policies: Vec<Policy>,
    #[serde(default)]
    pub status: MemberStatus,
    #[serde(default)]
    pub user: Option<MemberInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberInfo {
    pub email: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(rename = "two_factor_authentication_enabled", default)]
    pub two_factor: bool,
}

/// A member policy: an allow/deny grant over permission and resource
/// groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub id: String,
    pub access: String,
    #[serde(rename = "permission_groups", default)]
    pub permission_groups: Vec<PolicyPermissionGroup>,
    #[serde(rename = "resource_groups", default)]
    pub resource_groups: Vec<PolicyResourceGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyPermissionGroup {
    pub id: String,
    #[serde(rename = "meta", default)]
    pub metadata: BTreeMap<String, String>,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyResourceGroup {
    pub id: String,
    #[serde(rename = "scope")]
    pub scopes: Vec<PolicyResourceGroupScope>,
    #[serde(rename = "meta", default)]
    pub metadata: BTreeMap<String, String>,
    #[serde(default)]
    pub name: String,
}

/// A scope inside a resource group; `key` combines the resource name
/// and identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyResourceGroupScope {
    pub key: String,
    pub objects: Vec<Key>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PermissionGrant {
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub write: bool,
}

/// Payload for member creation. The two sibling shapes share their
/// discriminant fields and differ in the grant mechanism; the API tells
/// them apart by which list is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NewMember {
    WithRoles {
        email: String,
        status: MemberStatus,
        roles: Vec<String>,
    },
    WithPolicies {
        email: String,
        status: MemberStatus,
        policies: Vec<Policy>,
    },
}

impl NewMember {
    pub fn email(&self) -> &str {
        match self {
            NewMember::WithRoles { email, .. } | NewMember::WithPolicies { email, .. } => email,
        }
    }

    pub fn status(&self) -> MemberStatus {
        match self {
            NewMember::WithRoles { status, .. } | NewMember::WithPolicies { status, .. } => *status,
        }
    }
}

/// Payload for member updates, same sibling split as [`NewMember`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberUpdate {
    WithRoles {
        roles: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        status: Option<MemberStatus>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        user: Option<MemberInfo>,
    },
    WithPolicies {
        policies: Vec<Policy>,
    },
}

/// Sorting key for member listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberSort {
    #[serde(rename = "user.first_name")]
    FirstName,
    #[serde(rename = "user.last_name")]
    LastName,
    #[serde(rename = "user.email")]
    Email,
    #[serde(rename = "status")]
    Status,
}

impl fmt::Display for MemberSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberSort::FirstName => f.write_str("user.first_name"),
            MemberSort::LastName => f.write_str("user.last_name"),
            MemberSort::Email => f.write_str("user.email"),
            MemberSort::Status => f.write_str("status"),
        }
    }
}

/// Add a member to an account.
pub async fn add_member<T: Transport>(
    client: &Client<T>,
    account_id: &str,
    member: &NewMember,
) -> Result<Member, Error> {
    client
        .post(format!("/accounts/{account_id}/members"), Some(member))
        .await
}

/// Get a member of an account.
pub async fn get_member<T: Transport>(
    client: &Client<T>,
    account_id: &str,
    member_id: &str,
) -> Result<Member, Error> {
    client
        .get(format!("/accounts/{account_id}/members/{member_id}"))
        .await
}

/// Get all members in an account, optionally ordered and filtered by
/// status.
pub async fn list_members<T: Transport>(
    client: &Client<T>,
    account_id: &str,
    order: Option<MemberSort>,
    status: Option<MemberStatus>,
    page_params: PageParams,
) -> Result<Vec<Member>, Error> {
    let path = format!("/accounts/{account_id}/members?{page_params}");
    let path = append_parameter(path, "order", order, '&');
    let path = append_parameter(path, "status", status, '&');
    client.get(path).await
}

/// Update a member of an account.
pub async fn update_member<T: Transport>(
    client: &Client<T>,
    account_id: &str,
    member_id: &str,
    update: &MemberUpdate,
) -> Result<Member, Error> {
    client
        .put(format!("/accounts/{account_id}/members/{member_id}"), update)
        .await
}

/// Removes a member from an account; yields the ID of the removed
/// member.
pub async fn remove_member<T: Transport>(
    client: &Client<T>,
    account_id: &str,
    member_id: &str,
) -> Result<Id, Error> {
    client
        .delete(format!("/accounts/{account_id}/members/{member_id}"))
        .await
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_member_with_roles_encodes_roles_only() {
        let member = NewMember::WithRoles {
            email: "a@b.com".into(),
            status: MemberStatus::Pending,
            roles: vec!["r1".into()],
        };
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["roles"][0], "r1");
        assert!(json.get("policies").is_none());
    }

    #[test]
    fn new_member_decodes_by_grant_shape() {
        let with_roles: NewMember = serde_json::from_str(
            r#"{"email":"a@b.com","status":"accepted","roles":["r1"]}"#,
        )
        .unwrap();
        assert!(matches!(with_roles, NewMember::WithRoles { .. }));
        assert_eq!(with_roles.status(), MemberStatus::Accepted);

        let with_policies: NewMember = serde_json::from_str(
            r#"{"email":"a@b.com","status":"pending","policies":[]}"#,
        )
        .unwrap();
        assert!(matches!(with_policies, NewMember::WithPolicies { .. }));
    }

    #[test]
    fn member_decodes_with_defaults() {
        let member: Member = serde_json::from_str(r#"{"id":"m1"}"#).unwrap();
        assert_eq!(member.status, MemberStatus::Pending);
        assert!(member.roles.is_empty());
        assert!(member.user.is_none());
    }
}
