mod assert;
mod mock;

pub use assert::*;
pub use mock::*;

use bytes::Bytes;
use serde::Serialize;

pub fn json_bytes<T: Serialize>(v: &T) -> Bytes {
    Bytes::from(serde_json::to_vec(v).expect("json encode"))
}

/// A well-formed success envelope around `result`.
pub fn ok_envelope<T: Serialize>(result: &T) -> Bytes {
    json_bytes(&serde_json::json!({
        "errors": [],
        "messages": [],
        "success": true,
        "result": result,
    }))
}

/// A failure envelope carrying one `(status, message)` error entry.
pub fn error_envelope(status: i64, message: &str) -> Bytes {
    json_bytes(&serde_json::json!({
        "errors": [{"status": status, "message": message}],
        "messages": [],
        "success": false,
        "result": null,
    }))
}
