use crate::error::ApiError;
use crate::model::requests::Params;
use async_trait::async_trait;
use serde_json::Value;

/// Read-only category operations
///
/// Every method takes its named parameters plus an `extra` mapping merged
/// last, so keys in `extra` override the named ones. A `path` key in `extra`
/// replaces the default `/{category}/{operation}` path.
#[async_trait]
pub trait ExplorerService: Send + Sync {
    /// Domain Rating of a domain (`/site-explorer/domain-rating`)
    async fn get_domain_rating(&self, domain: &str, extra: Params) -> Result<Value, ApiError>;

    /// Backlink totals for a target (`/site-explorer/backlinks-stats`)
    async fn get_backlinks_stats(&self, target: &str, extra: Params) -> Result<Value, ApiError>;

    /// Organic and paid metrics for a target (`/site-explorer/metrics`)
    async fn get_metrics(&self, target: &str, extra: Params) -> Result<Value, ApiError>;

    /// Metrics split by country (`/site-explorer/metrics-by-country`)
    async fn get_metrics_by_country(
        &self,
        target: &str,
        country: Option<&str>,
        extra: Params,
    ) -> Result<Value, ApiError>;

    /// Broken backlinks pointing to a target (`/backlinks/broken`)
    async fn get_broken_backlinks(&self, target: &str, extra: Params) -> Result<Value, ApiError>;

    /// Referring domains of a target (`/backlinks/refdomains`)
    async fn get_refdomains(&self, target: &str, extra: Params) -> Result<Value, ApiError>;

    /// Anchor texts of a target's backlinks (`/backlinks/anchors`)
    async fn get_anchors(&self, target: &str, extra: Params) -> Result<Value, ApiError>;

    /// Organic search competitors (`/organic/competitors`)
    async fn get_organic_competitors(
        &self,
        target: &str,
        extra: Params,
    ) -> Result<Value, ApiError>;

    /// Top pages by organic traffic (`/organic/top-pages`)
    async fn get_top_pages(&self, target: &str, extra: Params) -> Result<Value, ApiError>;

    /// Keyword overview (`/keywords-explorer/overview`)
    async fn get_keywords_overview(&self, query: &str, extra: Params) -> Result<Value, ApiError>;

    /// Keyword search volume by country (`/keywords-explorer/volume-by-country`)
    async fn get_keywords_volume_by_country(
        &self,
        query: &str,
        country: Option<&str>,
        extra: Params,
    ) -> Result<Value, ApiError>;

    /// SERP overview for a keyword (`/serp/overview`)
    async fn get_serp_overview(&self, query: &str, extra: Params) -> Result<Value, ApiError>;

    /// Subscription limits and usage (`/subscription/limits-and-usage`)
    async fn get_limits_and_usage(&self, extra: Params) -> Result<Value, ApiError>;

    /// Crawler IP addresses (`/public/crawler-ip-addresses`)
    async fn get_crawler_ip_addresses(&self, extra: Params) -> Result<Value, ApiError>;

    /// Crawler IP ranges (`/public/crawler-ip-ranges`)
    async fn get_crawler_ip_ranges(&self, extra: Params) -> Result<Value, ApiError>;
}
