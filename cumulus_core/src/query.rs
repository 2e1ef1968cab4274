use core::fmt;
use std::fmt::Write as _;

/// Appends `<separator><name>=<value>` when `value` is present; returns
/// `url` unchanged otherwise.
///
/// Values are interpolated as-is. Callers own pre-encoding of reserved
/// characters; this function never URL-escapes.
pub fn append_parameter<V: fmt::Display>(
    url: impl Into<String>,
    name: &str,
    value: Option<V>,
    separator: char,
) -> String {
    let mut url = url.into();
    if let Some(v) = value {
        let _ = write!(url, "{separator}{name}={v}");
    }
    url
}

/// Ordered parameter set for [`append_parameters`].
///
/// Entries are emitted in insertion order; absent values are kept so the
/// declared order is stable but are skipped during encoding.
#[derive(Debug, Clone, Default)]
pub struct QueryMap {
    entries: Vec<(String, Option<String>)>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, name: impl Into<String>, value: Option<impl fmt::Display>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: Option<impl fmt::Display>) {
        self.entries
            .push((name.into(), value.map(|v| v.to_string())));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, v)| v.is_none())
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

/// Appends every present parameter in insertion order, with `?` before
/// the first emitted pair and `&` thereafter. Skipped (absent) values do
/// not consume a separator. If `url` already carries a query string, the
/// first emitted pair uses `&` instead.
///
/// Like [`append_parameter`], values are interpolated without escaping.
pub fn append_parameters(url: impl Into<String>, params: &QueryMap) -> String {
    let mut url = url.into();
    let mut first = !url.contains('?');
    for (name, value) in params.iter() {
        if let Some(v) = value {
            let sep = if first { '?' } else { '&' };
            let _ = write!(url, "{sep}{name}={v}");
            first = false;
        }
    }
    url
}
