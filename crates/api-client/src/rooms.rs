//! Room endpoints

use crate::client::ApiClient;
use crate::request::ApiRequest;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A room to create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoom {
    /// Room name
    pub name: String,
    /// Short description
    pub description: String,
    /// Room type, e.g. "voice" or "text"
    #[serde(rename = "type")]
    pub kind: String,
}

impl ApiClient {
    /// List rooms
    pub async fn get_rooms(&self) -> Result<Value> {
        self.send(ApiRequest::get("/rooms")).await
    }

    /// Create a room
    pub async fn create_room(&self, room: &NewRoom) -> Result<Value> {
        self.send(ApiRequest::post("/rooms").json_body(room)?).await
    }
}
