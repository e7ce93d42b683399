//! Search endpoints

use crate::client::ApiClient;
use crate::request::{segment, ApiRequest};
use crate::Result;
use serde_json::Value;

/// Optional narrowing for post search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Restrict to one interest tag
    pub interest: Option<String>,
    /// Result page
    pub page: Option<u32>,
    /// Page size
    pub limit: Option<u32>,
    /// Additional backend-specific filters
    pub extra: Vec<(String, String)>,
}

impl SearchFilters {
    /// Restrict to an interest
    pub fn interest(mut self, interest: impl Into<String>) -> Self {
        self.interest = Some(interest.into());
        self
    }

    /// Select a page
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Add a backend-specific filter
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    fn apply(&self, request: ApiRequest) -> ApiRequest {
        let request = request
            .param_opt("interest", self.interest.as_deref())
            .param_opt("page", self.page)
            .param_opt("limit", self.limit);
        self.extra.iter().fold(request, |req, (k, v)| req.param(k.as_str(), v))
    }
}

impl ApiClient {
    /// Full-text post search
    pub async fn search_posts(&self, query: &str, filters: &SearchFilters) -> Result<Value> {
        let request = filters.apply(ApiRequest::get("/search/posts").param("q", query));
        self.send(request).await
    }

    /// Posts tagged with an interest
    pub async fn search_by_interest(&self, interest: &str, page: Option<u32>) -> Result<Value> {
        let request = ApiRequest::get(format!("/search/interest/{}", segment(interest)))
            .param("page", page.unwrap_or(1));
        self.send(request).await
    }
}
