use crate::error::ApiError;
use crate::model::requests::Params;
use async_trait::async_trait;
use serde_json::Value;

/// Rank tracker project management
///
/// Reads go through the category GET path. Writes send a JSON body with
/// `extra` merged into it; keyword writes use PUT, which the transport never
/// retries.
#[async_trait]
pub trait ManagementService: Send + Sync {
    /// Lists projects
    async fn get_projects(&self, extra: Params) -> Result<Value, ApiError>;

    /// Creates a project for `target`
    async fn create_project(
        &self,
        name: &str,
        target: &str,
        extra: Params,
    ) -> Result<Value, ApiError>;

    /// Lists tracked keywords of a project
    async fn get_keywords(&self, project_id: &str, extra: Params) -> Result<Value, ApiError>;

    /// Adds or updates tracked keywords (PUT)
    async fn put_keywords(
        &self,
        project_id: &str,
        keywords: &[String],
        extra: Params,
    ) -> Result<Value, ApiError>;

    /// Removes tracked keywords (PUT to `/management/keywords/delete`)
    async fn delete_keywords(
        &self,
        project_id: &str,
        keywords: &[String],
        extra: Params,
    ) -> Result<Value, ApiError>;

    /// Lists competitors of a project
    async fn get_competitors(&self, project_id: &str, extra: Params) -> Result<Value, ApiError>;

    /// Adds competitors (POST)
    async fn add_competitors(
        &self,
        project_id: &str,
        competitors: &[String],
        extra: Params,
    ) -> Result<Value, ApiError>;

    /// Removes competitors (POST to `/management/competitors/delete`)
    async fn delete_competitors(
        &self,
        project_id: &str,
        competitors: &[String],
        extra: Params,
    ) -> Result<Value, ApiError>;

    /// Keyword lists, optionally for one project
    async fn get_keyword_lists(
        &self,
        project_id: Option<&str>,
        extra: Params,
    ) -> Result<Value, ApiError>;

    /// Supported locations and languages
    async fn get_locations_and_languages(&self, extra: Params) -> Result<Value, ApiError>;
}
