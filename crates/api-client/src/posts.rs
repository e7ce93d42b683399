//! Feed and post endpoints

use crate::client::ApiClient;
use crate::request::{segment, ApiRequest};
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default feed page
pub const DEFAULT_PAGE: u32 = 1;

/// Default feed page size
pub const DEFAULT_LIMIT: u32 = 20;

/// Post body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostContent {
    /// Content type, e.g. "text" or "image"
    #[serde(rename = "type")]
    pub kind: String,
    /// Text, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Media URLs, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<String>>,
}

impl PostContent {
    /// A text-only post body
    pub fn text(text: impl Into<String>) -> Self {
        Self { kind: "text".to_string(), text: Some(text.into()), media: None }
    }
}

/// A post to create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    /// Body
    pub content: PostContent,
    /// Every interest the post is tagged with
    pub interest_tags: Vec<String>,
    /// The interest the post is filed under
    pub primary_interest: String,
}

impl ApiClient {
    /// Get a page of the home feed
    pub async fn get_feed(&self, page: Option<u32>, limit: Option<u32>) -> Result<Value> {
        let request = ApiRequest::get("/feed")
            .param("page", page.unwrap_or(DEFAULT_PAGE))
            .param("limit", limit.unwrap_or(DEFAULT_LIMIT));
        self.send(request).await
    }

    /// Create a post
    pub async fn create_post(&self, post: &NewPost) -> Result<Value> {
        self.send(ApiRequest::post("/posts").json_body(post)?).await
    }

    /// Get a post by id
    pub async fn get_post(&self, id: &str) -> Result<Value> {
        self.send(ApiRequest::get(format!("/posts/{}", segment(id)))).await
    }
}
