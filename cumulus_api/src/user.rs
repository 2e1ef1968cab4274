use cumulus_core::{Client, Error, Transport};
use serde::{Deserialize, Serialize};

/// The user the credentials belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
    #[serde(rename = "two_factor_authentication_enabled", default)]
    pub two_factor: bool,
}

/// Partial update of the user's profile; absent fields are left
/// untouched server-side.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
}

/// Get the user the credentials belong to.
pub async fn get_user<T: Transport>(client: &Client<T>) -> Result<User, Error> {
    client.get("/user").await
}

/// Edit parts of the user's profile; yields the updated user.
pub async fn edit_user<T: Transport>(client: &Client<T>, edit: &EditUser) -> Result<User, Error> {
    client.patch("/user", edit).await
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn edit_user_serializes_only_present_fields() {
        let edit = EditUser {
            first_name: Some("Ada".into()),
            ..EditUser::default()
        };
        assert_eq!(
            serde_json::to_string(&edit).unwrap(),
            r#"{"first_name":"Ada"}"#
        );
    }
}
