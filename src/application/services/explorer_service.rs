use crate::application::interfaces::explorer::ExplorerService;
use crate::application::services::with_params;
use crate::client::Client;
use crate::error::ApiError;
use crate::model::category::Category;
use crate::model::requests::Params;
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::info;

#[async_trait]
impl ExplorerService for Client {
    async fn get_domain_rating(&self, domain: &str, extra: Params) -> Result<Value, ApiError> {
        info!("Getting domain rating: {}", domain);
        let params = with_params([("domain", json!(domain))], extra);
        self.get_category(Category::SiteExplorer, "domain-rating", params)
            .await
    }

    async fn get_backlinks_stats(&self, target: &str, extra: Params) -> Result<Value, ApiError> {
        let params = with_params([("target", json!(target))], extra);
        self.get_category(Category::SiteExplorer, "backlinks-stats", params)
            .await
    }

    async fn get_metrics(&self, target: &str, extra: Params) -> Result<Value, ApiError> {
        let params = with_params([("target", json!(target))], extra);
        self.get_category(Category::SiteExplorer, "metrics", params)
            .await
    }

    async fn get_metrics_by_country(
        &self,
        target: &str,
        country: Option<&str>,
        extra: Params,
    ) -> Result<Value, ApiError> {
        let mut params = with_params([("target", json!(target))], Params::new());
        if let Some(country) = country.filter(|c| !c.is_empty()) {
            params.insert("country".to_string(), json!(country));
        }
        params.extend(extra);
        self.get_category(Category::SiteExplorer, "metrics-by-country", params)
            .await
    }

    async fn get_broken_backlinks(&self, target: &str, extra: Params) -> Result<Value, ApiError> {
        let params = with_params([("target", json!(target))], extra);
        self.get_category(Category::Backlinks, "broken", params).await
    }

    async fn get_refdomains(&self, target: &str, extra: Params) -> Result<Value, ApiError> {
        let params = with_params([("target", json!(target))], extra);
        self.get_category(Category::Backlinks, "refdomains", params)
            .await
    }

    async fn get_anchors(&self, target: &str, extra: Params) -> Result<Value, ApiError> {
        let params = with_params([("target", json!(target))], extra);
        self.get_category(Category::Backlinks, "anchors", params).await
    }

    async fn get_organic_competitors(
        &self,
        target: &str,
        extra: Params,
    ) -> Result<Value, ApiError> {
        let params = with_params([("target", json!(target))], extra);
        self.get_category(Category::Organic, "competitors", params)
            .await
    }

    async fn get_top_pages(&self, target: &str, extra: Params) -> Result<Value, ApiError> {
        let params = with_params([("target", json!(target))], extra);
        self.get_category(Category::Organic, "top-pages", params).await
    }

    async fn get_keywords_overview(&self, query: &str, extra: Params) -> Result<Value, ApiError> {
        info!("Getting keywords overview: {}", query);
        let params = with_params([("query", json!(query))], extra);
        self.get_category(Category::KeywordsExplorer, "overview", params)
            .await
    }

    async fn get_keywords_volume_by_country(
        &self,
        query: &str,
        country: Option<&str>,
        extra: Params,
    ) -> Result<Value, ApiError> {
        let mut params = with_params([("query", json!(query))], Params::new());
        if let Some(country) = country.filter(|c| !c.is_empty()) {
            params.insert("country".to_string(), json!(country));
        }
        params.extend(extra);
        self.get_category(Category::KeywordsExplorer, "volume-by-country", params)
            .await
    }

    async fn get_serp_overview(&self, query: &str, extra: Params) -> Result<Value, ApiError> {
        let params = with_params([("query", json!(query))], extra);
        self.get_category(Category::Serp, "overview", params).await
    }

    async fn get_limits_and_usage(&self, extra: Params) -> Result<Value, ApiError> {
        self.get_category(Category::Subscription, "limits-and-usage", extra)
            .await
    }

    async fn get_crawler_ip_addresses(&self, extra: Params) -> Result<Value, ApiError> {
        self.get_category(Category::Public, "crawler-ip-addresses", extra)
            .await
    }

    async fn get_crawler_ip_ranges(&self, extra: Params) -> Result<Value, ApiError> {
        self.get_category(Category::Public, "crawler-ip-ranges", extra)
            .await
    }
}
