use cumulus_core::{append_parameters, Client, Error, QueryMap, Transport};
use serde::{Deserialize, Serialize};

/// A DNS analytics report for a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsReport {
    pub data: Vec<DnsReportRow>,
    /// Seconds between current time and the last processed event.
    #[serde(rename = "data_lag")]
    pub data_lag: i64,
    pub rows: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsReportRow {
    #[serde(rename = "dimensions")]
    pub metric_keys: Vec<String>,
    #[serde(rename = "metrics")]
    pub metric_values: Vec<i64>,
}

/// Optional report filters; every field maps to one query parameter and
/// is omitted when unset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DnsReportQuery {
    /// Comma-separated dimensions to group results by.
    pub dimensions: Option<String>,
    /// Segmentation filter in `attribute operator value` format.
    pub filters: Option<String>,
    pub limit: Option<u32>,
    /// Comma-separated metrics queries to return.
    pub metrics: Option<String>,
    pub since: Option<String>,
    /// Comma-separated dimensions to sort by, each optionally prefixed
    /// by `-` (descending) or `+` (ascending).
    pub sort: Option<String>,
    pub until: Option<String>,
}

/// Gets a DNS report for a specific zone.
pub async fn get_dns_report<T: Transport>(
    client: &Client<T>,
    zone_id: &str,
    query: &DnsReportQuery,
) -> Result<DnsReport, Error> {
    let path = append_parameters(
        format!("/zones/{zone_id}/dns_analytics/report"),
        &QueryMap::new()
            .entry("dimensions", query.dimensions.as_deref())
            .entry("filters", query.filters.as_deref())
            .entry("limit", query.limit)
            .entry("metrics", query.metrics.as_deref())
            .entry("since", query.since.as_deref())
            .entry("sort", query.sort.as_deref())
            .entry("until", query.until.as_deref()),
    );
    client.get(path).await
}
