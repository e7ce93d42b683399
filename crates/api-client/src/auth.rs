//! Account registration and sign-in

use crate::client::ApiClient;
use crate::request::ApiRequest;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use storage::{AccountKind, ExperienceMode, InterestSet};
use tracing::info;

/// New account details, including everything picked during onboarding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display handle
    pub username: String,
    /// Sign-in email
    pub email: String,
    /// Password
    pub password: String,
    /// Chosen experience mode
    pub experience_type: ExperienceMode,
    /// Account kind
    pub account_type: AccountKind,
    /// Selected interest tags
    pub interests: InterestSet,
}

/// Email and password sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Sign-in email
    pub email: String,
    /// Password
    pub password: String,
}

impl Credentials {
    /// Create credentials
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl ApiClient {
    /// Register a new account
    pub async fn register(&self, request: &RegisterRequest) -> Result<Value> {
        self.send(ApiRequest::post("/auth/register").json_body(request)?).await
    }

    /// Sign in, storing the returned token for later requests
    pub async fn login(&self, credentials: &Credentials) -> Result<Value> {
        let data: Value = self.send(ApiRequest::post("/auth/login").json_body(credentials)?).await?;

        if let Some(token) = data.get("token").and_then(Value::as_str) {
            self.store().set_auth_token(token).await?;
            info!("signed in, auth token stored");
        }
        Ok(data)
    }

    /// Sign out
    ///
    /// The local token is dropped before the server is told, so a failed
    /// request still leaves the device signed out.
    pub async fn logout(&self) -> Result<Value> {
        self.store().clear_auth_token().await?;
        self.send(ApiRequest::post("/auth/logout")).await
    }
}
