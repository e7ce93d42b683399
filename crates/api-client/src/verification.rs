//! Entity account verification

use crate::client::ApiClient;
use crate::request::ApiRequest;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// How an entity account proves who it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationKind {
    /// Linked social accounts
    Social,
    /// Paid verification
    Paid,
    /// Manual application
    Application,
}

impl ApiClient {
    /// Submit a verification request
    pub async fn request_verification(&self, kind: VerificationKind, data: Value) -> Result<Value> {
        let body = json!({ "type": kind, "data": data });
        self.send(ApiRequest::post("/verification/request").json_body(&body)?).await
    }
}
