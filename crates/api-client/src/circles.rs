//! Circle (group) endpoints

use crate::client::ApiClient;
use crate::request::{segment, ApiRequest};
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A circle to create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCircle {
    /// Circle name
    pub name: String,
    /// Short description
    pub description: String,
}

impl ApiClient {
    /// List circles
    pub async fn get_circles(&self) -> Result<Value> {
        self.send(ApiRequest::get("/circles")).await
    }

    /// Create a circle
    pub async fn create_circle(&self, name: &str, description: &str) -> Result<Value> {
        let circle = NewCircle { name: name.to_string(), description: description.to_string() };
        self.send(ApiRequest::post("/circles").json_body(&circle)?).await
    }

    /// Join a circle
    pub async fn join_circle(&self, id: &str) -> Result<Value> {
        self.send(ApiRequest::post(format!("/circles/{}/join", segment(id)))).await
    }
}
