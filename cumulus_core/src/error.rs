use base64::engine::general_purpose::STANDARD_NO_PAD as B64;
use base64::Engine;
use http::{HeaderMap, StatusCode};
use thiserror::Error;

use crate::envelope::ResponseInfo;
use crate::transport::TransportError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid/missing param: {0}")]
    InvalidParam(&'static str),

    #[error("build url error: {0}")]
    BuildUrl(#[from] url::ParseError),

    #[error("transport: {0}")]
    Transport(#[from] TransportError),

    /// 403 from the API. The body is not consulted; credentials were rejected.
    #[error("authentication failed (status 403): check your API token, email, and API key")]
    Authentication,

    /// Any non-2xx status other than 403/404.
    #[error("status {status}")]
    HttpStatus {
        status: StatusCode,
        headers: HeaderMap,
        body: String,
    },

    /// 2xx body that did not parse as a response envelope.
    #[error("decode error: {source}")]
    Decode { source: BoxError, body: String },

    /// Envelope parsed but reported `success: false`.
    #[error("api error: {}", summarize(.0))]
    Envelope(Vec<ResponseInfo>),

    /// Envelope parsed with `success: true` but carried no result,
    /// or the resource was absent (404) on a non-nullable accessor.
    #[error("no result returned")]
    EmptyResult,

    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),
}

fn summarize(infos: &[ResponseInfo]) -> String {
    match infos.first() {
        Some(first) if infos.len() == 1 => format!("{} {}", first.status(), first.message()),
        Some(first) => format!(
            "{} {} (+{} more)",
            first.status(),
            first.message(),
            infos.len() - 1
        ),
        None => "unspecified failure".to_owned(),
    }
}

/// Bounded textual preview of a response body for error reporting.
///
/// Text and JSON bodies are shown as UTF-8; anything else is base64.
pub fn body_as_text(headers: &HeaderMap, body: &bytes::Bytes) -> String {
    const MAX: usize = 8 * 1024;
    let ct = headers
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let slice = if body.len() > MAX {
        &body[..MAX]
    } else {
        &body[..]
    };
    if ct.starts_with("application/json") || ct.starts_with("text/") {
        match std::str::from_utf8(slice) {
            Ok(s) => {
                if body.len() > slice.len() {
                    format!("{}...", s)
                } else {
                    s.to_owned()
                }
            }
            Err(_) => format!("<non-utf8-text; {} bytes>", slice.len()),
        }
    } else {
        let b64 = B64.encode(slice);
        format!(
            "<non-text; {} bytes; base64:{}{}>",
            body.len(),
            &b64[..b64.len().min(1024)],
            if b64.len() > 1024 { "..." } else { "" }
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn body_preview_shows_json_as_text() {
        let mut headers = HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        let body = bytes::Bytes::from_static(b"{\"success\":false}");
        assert_eq!(body_as_text(&headers, &body), "{\"success\":false}");
    }

    #[test]
    fn body_preview_encodes_binary() {
        let headers = HeaderMap::new();
        let body = bytes::Bytes::from_static(&[0x00, 0x01, 0x02]);
        let s = body_as_text(&headers, &body);
        assert!(s.starts_with("<non-text; 3 bytes; base64:"), "got: {s}");
    }

    #[test]
    fn envelope_error_display_names_first_code() {
        let infos = vec![
            ResponseInfo::new(1003, "Invalid or missing zone id.").unwrap(),
            ResponseInfo::new(1004, "also bad").unwrap(),
        ];
        let e = Error::Envelope(infos);
        let s = e.to_string();
        assert!(s.contains("1003"), "got: {s}");
        assert!(s.contains("+1 more"), "got: {s}");
    }
}
