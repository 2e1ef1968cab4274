use cumulus_core::{Client, Error, Transport};
use serde::{Deserialize, Serialize};

use crate::members::PermissionGrant;

/// A role a member can hold in an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub description: String,
    pub name: String,
    pub permissions: RolePermissions,
}

/// Per-product permission grants carried by a [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RolePermissions {
    #[serde(default)]
    pub analytics: PermissionGrant,
    #[serde(default)]
    pub billing: PermissionGrant,
    #[serde(rename = "cache_purge", default)]
    pub cache_purge: PermissionGrant,
    #[serde(default)]
    pub dns: PermissionGrant,
    #[serde(rename = "dns_records", default)]
    pub dns_records: PermissionGrant,
    #[serde(rename = "lb", default)]
    pub load_balancing: PermissionGrant,
    #[serde(default)]
    pub logs: PermissionGrant,
    #[serde(default)]
    pub organization: PermissionGrant,
    #[serde(default)]
    pub ssl: PermissionGrant,
    #[serde(default)]
    pub waf: PermissionGrant,
    #[serde(rename = "zone_settings", default)]
    pub zone_settings: PermissionGrant,
    #[serde(default)]
    pub zones: PermissionGrant,
}

/// Gets information about a specific role for an account.
pub async fn get_role<T: Transport>(
    client: &Client<T>,
    account_id: &str,
    role_id: &str,
) -> Result<Role, Error> {
    client
        .get(format!("/accounts/{account_id}/roles/{role_id}"))
        .await
}

/// Gets the list of roles for an account.
pub async fn list_roles<T: Transport>(
    client: &Client<T>,
    account_id: &str,
) -> Result<Vec<Role>, Error> {
    client.get(format!("/accounts/{account_id}/roles")).await
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn role_permissions_default_to_no_access() {
        let role: Role = serde_json::from_str(
            r#"{"id":"r1","description":"d","name":"admin","permissions":{"dns":{"read":true}}}"#,
        )
        .unwrap();
        assert!(role.permissions.dns.read);
        assert!(!role.permissions.dns.write);
        assert!(!role.permissions.billing.read);
    }
}
