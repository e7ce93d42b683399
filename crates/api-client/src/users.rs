//! Profile endpoints

use crate::client::ApiClient;
use crate::request::ApiRequest;
use crate::Result;
use serde_json::Value;

impl ApiClient {
    /// Get the signed-in user's profile
    pub async fn get_profile(&self) -> Result<Value> {
        self.send(ApiRequest::get("/users/profile")).await
    }

    /// Update the signed-in user's profile
    pub async fn update_profile(&self, profile: &Value) -> Result<Value> {
        self.send(ApiRequest::put("/users/profile").json_body(profile)?).await
    }
}
