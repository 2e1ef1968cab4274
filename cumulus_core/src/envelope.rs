use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Floor of the API's own status-code namespace. Codes below this are
/// HTTP statuses and must never appear in a [`ResponseInfo`].
pub const MINIMUM_RESPONSE_CODE: i64 = 1000;

/// A single coded message in the API's own status namespace.
///
/// Constructed through [`ResponseInfo::new`], which enforces the
/// `status >= 1000` invariant; wire values below the floor fail
/// deserialization rather than being clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ResponseInfoWire")]
pub struct ResponseInfo {
    status: i64,
    message: String,
}

impl ResponseInfo {
    pub fn new(status: i64, message: impl Into<String>) -> Result<Self, InvalidResponseCode> {
        if status < MINIMUM_RESPONSE_CODE {
            return Err(InvalidResponseCode(status));
        }
        Ok(Self {
            status,
            message: message.into(),
        })
    }

    #[inline]
    pub fn status(&self) -> i64 {
        self.status
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("response code {0} is below the API namespace floor (1000)")]
pub struct InvalidResponseCode(pub i64);

#[derive(Deserialize)]
struct ResponseInfoWire {
    status: i64,
    #[serde(default)]
    message: String,
}

impl TryFrom<ResponseInfoWire> for ResponseInfo {
    type Error = InvalidResponseCode;

    fn try_from(wire: ResponseInfoWire) -> Result<Self, Self::Error> {
        ResponseInfo::new(wire.status, wire.message)
    }
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultInfo {
    #[serde(default)]
    pub count: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total_count: u64,
}

impl Default for ResultInfo {
    fn default() -> Self {
        Self {
            count: 0,
            page: 1,
            per_page: 0,
            total_count: 0,
        }
    }
}

fn first_page() -> u32 {
    1
}

/// The uniform wrapper around every API response body.
///
/// Created per response and discarded after unwrapping. When `success`
/// is false, `result` is meaningless even if present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de>"
))]
pub struct Envelope<T> {
    #[serde(default)]
    pub errors: Vec<ResponseInfo>,
    #[serde(default)]
    pub messages: Vec<ResponseInfo>,
    #[serde(default = "success_default")]
    pub success: bool,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub result_info: Option<ResultInfo>,
}

fn success_default() -> bool {
    true
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn response_info_rejects_http_statuses() {
        assert_eq!(
            ResponseInfo::new(500, "x").unwrap_err(),
            InvalidResponseCode(500)
        );
        let ok = ResponseInfo::new(1000, "x").unwrap();
        assert_eq!(ok.status(), 1000);
        assert_eq!(ok.message(), "x");
    }

    #[test]
    fn response_info_wire_violation_fails_decode() {
        let err = serde_json::from_str::<ResponseInfo>(r#"{"status":403,"message":"nope"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("403"), "got: {err}");

        let ok: ResponseInfo =
            serde_json::from_str(r#"{"status":1003,"message":"bad zone"}"#).unwrap();
        assert_eq!(ok.status(), 1003);
    }

    #[test]
    fn envelope_defaults() {
        let env: Envelope<String> = serde_json::from_str(r#"{"result":"a"}"#).unwrap();
        assert!(env.success);
        assert!(env.errors.is_empty());
        assert!(env.messages.is_empty());
        assert_eq!(env.result.as_deref(), Some("a"));
        assert!(env.result_info.is_none());
    }

    #[test]
    fn envelope_failure_shape() {
        let env: Envelope<String> = serde_json::from_str(
            r#"{"success":false,"errors":[{"status":1003,"message":"bad"}],"result":null}"#,
        )
        .unwrap();
        assert!(!env.success);
        assert_eq!(env.errors.len(), 1);
        assert_eq!(env.errors[0].status(), 1003);
        assert!(env.result.is_none());
    }

    #[test]
    fn result_info_fills_defaults() {
        let info: ResultInfo = serde_json::from_str(r#"{"count":3}"#).unwrap();
        assert_eq!(info.count, 3);
        assert_eq!(info.page, 1);
        assert_eq!(info.per_page, 0);
        assert_eq!(info.total_count, 0);
    }
}
