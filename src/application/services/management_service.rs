use crate::application::interfaces::management::ManagementService;
use crate::application::services::with_params;
use crate::client::Client;
use crate::error::ApiError;
use crate::model::category::Category;
use crate::model::requests::Params;
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::info;

#[async_trait]
impl ManagementService for Client {
    async fn get_projects(&self, extra: Params) -> Result<Value, ApiError> {
        self.get_category(Category::Management, "projects", extra)
            .await
    }

    async fn create_project(
        &self,
        name: &str,
        target: &str,
        extra: Params,
    ) -> Result<Value, ApiError> {
        info!("Creating project {} for {}", name, target);
        let body = with_params([("name", json!(name)), ("target", json!(target))], extra);
        self.post("/management/projects", Value::Object(body)).await
    }

    async fn get_keywords(&self, project_id: &str, extra: Params) -> Result<Value, ApiError> {
        let params = with_params([("project_id", json!(project_id))], extra);
        self.get_category(Category::Management, "keywords", params)
            .await
    }

    async fn put_keywords(
        &self,
        project_id: &str,
        keywords: &[String],
        extra: Params,
    ) -> Result<Value, ApiError> {
        info!("Updating {} keywords in project {}", keywords.len(), project_id);
        let body = with_params(
            [("project_id", json!(project_id)), ("keywords", json!(keywords))],
            extra,
        );
        self.put("/management/keywords", Value::Object(body)).await
    }

    async fn delete_keywords(
        &self,
        project_id: &str,
        keywords: &[String],
        extra: Params,
    ) -> Result<Value, ApiError> {
        info!("Deleting {} keywords from project {}", keywords.len(), project_id);
        let body = with_params(
            [("project_id", json!(project_id)), ("keywords", json!(keywords))],
            extra,
        );
        self.put("/management/keywords/delete", Value::Object(body))
            .await
    }

    async fn get_competitors(&self, project_id: &str, extra: Params) -> Result<Value, ApiError> {
        let params = with_params([("project_id", json!(project_id))], extra);
        self.get_category(Category::Management, "competitors", params)
            .await
    }

    async fn add_competitors(
        &self,
        project_id: &str,
        competitors: &[String],
        extra: Params,
    ) -> Result<Value, ApiError> {
        let body = with_params(
            [
                ("project_id", json!(project_id)),
                ("competitors", json!(competitors)),
            ],
            extra,
        );
        self.post("/management/competitors", Value::Object(body))
            .await
    }

    async fn delete_competitors(
        &self,
        project_id: &str,
        competitors: &[String],
        extra: Params,
    ) -> Result<Value, ApiError> {
        let body = with_params(
            [
                ("project_id", json!(project_id)),
                ("competitors", json!(competitors)),
            ],
            extra,
        );
        self.post("/management/competitors/delete", Value::Object(body))
            .await
    }

    async fn get_keyword_lists(
        &self,
        project_id: Option<&str>,
        extra: Params,
    ) -> Result<Value, ApiError> {
        let mut params = Params::new();
        if let Some(project_id) = project_id {
            params.insert("project_id".to_string(), json!(project_id));
        }
        params.extend(extra);
        self.get_category(Category::Management, "keyword-lists", params)
            .await
    }

    async fn get_locations_and_languages(&self, extra: Params) -> Result<Value, ApiError> {
        self.get_category(Category::Management, "locations-and-languages", extra)
            .await
    }
}
