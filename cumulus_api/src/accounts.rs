use cumulus_core::{append_parameter, Client, Error, PageParams, Transport};
use serde::{Deserialize, Serialize};

use crate::shared::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccountType {
    #[default]
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "enterprise")]
    Enterprise,
}

/// A Cloudflare account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub settings: AccountSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountSettings {
    #[serde(default)]
    pub abuse_contact_email: Option<String>,
    #[serde(rename = "enforce_twofactor", default)]
    pub enforce_two_factor: bool,
}

/// Payload for account creation (tenant admins only; requires the
/// email/key credential shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccount {
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Id>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAccount {
    pub name: String,
    #[serde(default)]
    pub settings: AccountSettings,
}

/// Create an account.
pub async fn create_account<T: Transport>(
    client: &Client<T>,
    details: &CreateAccount,
) -> Result<Account, Error> {
    client.post("/accounts", Some(details)).await
}

/// Get information about a specific account that you are a member of.
pub async fn get_account<T: Transport>(
    client: &Client<T>,
    account_id: &str,
) -> Result<Account, Error> {
    client.get(format!("/accounts/{account_id}")).await
}

/// Lists all the accounts that you are a member of, optionally filtered
/// by name.
pub async fn list_accounts<T: Transport>(
    client: &Client<T>,
    name: Option<&str>,
    page_params: PageParams,
) -> Result<Vec<Account>, Error> {
    client
        .get(append_parameter(
            format!("/accounts?{page_params}"),
            "name",
            name,
            '&',
        ))
        .await
}

/// Update the details of an account.
pub async fn update_account<T: Transport>(
    client: &Client<T>,
    account_id: &str,
    details: &UpdateAccount,
) -> Result<Account, Error> {
    client.put(format!("/accounts/{account_id}"), details).await
}

/// Deletes an account; yields the ID of the deleted account.
pub async fn delete_account<T: Transport>(
    client: &Client<T>,
    account_id: &str,
) -> Result<Id, Error> {
    client.delete(format!("/accounts/{account_id}")).await
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn create_account_omits_absent_unit() {
        let details = CreateAccount {
            name: "edge".into(),
            account_type: AccountType::Standard,
            unit: None,
        };
        let json = serde_json::to_string(&details).unwrap();
        assert_eq!(json, r#"{"name":"edge","type":"standard"}"#);
    }

    #[test]
    fn account_decodes_with_minimal_fields() {
        let account: Account =
            serde_json::from_str(r#"{"id":"abc","name":"edge"}"#).unwrap();
        assert_eq!(account.id, "abc");
        assert!(account.created_on.is_none());
        assert!(!account.settings.enforce_two_factor);
    }
}
