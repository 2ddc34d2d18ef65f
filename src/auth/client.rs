//! CathoLink Portal Client
//!
//! A client for the student portal, allowing for profile retrieval and
//! session sign-out.

use crate::auth::Authenticator;
use crate::auth::Profile;
use crate::auth::error::AuthError;
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("catholink-cli/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct PortalClient {
    client: Client,
    environment: Environment,
    session_token: Option<String>,
}

impl PortalClient {
    pub fn new(environment: Environment, session_token: Option<String>) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(Duration::from_secs(10))
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            environment,
            session_token,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.portal_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AuthError> {
        serde_json::from_slice(bytes).map_err(AuthError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, AuthError> {
        if !response.status().is_success() {
            return Err(AuthError::from_response(response).await);
        }
        Ok(response)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.session_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, AuthError> {
        let url = self.build_url(endpoint);
        let response = self
            .authorize(self.client.get(&url))
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn post_request_no_response(&self, endpoint: &str) -> Result<(), AuthError> {
        let url = self.build_url(endpoint);
        let response = self
            .authorize(self.client.post(&url))
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        Self::handle_response_status(response).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Authenticator for PortalClient {
    async fn fetch_profile(&self) -> Result<Profile, AuthError> {
        self.get_request("/api/student/profile").await
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.post_request_no_response("/api/auth/sign-out").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // URL building must tolerate stray slashes on either side.
    fn test_build_url_joins_cleanly() {
        let client = PortalClient::new(Environment::Local, None);
        assert_eq!(
            client.build_url("/api/student/profile"),
            "http://localhost:54321/api/student/profile"
        );
        assert_eq!(
            client.build_url("api/student/profile"),
            "http://localhost:54321/api/student/profile"
        );
    }

    #[test]
    fn test_decode_profile_payload() {
        let body = r#"{"name":"Jane Doe","section":"St. Agnes","profile_picture_url":null}"#;
        let profile: Profile = PortalClient::decode_response(body.as_bytes()).unwrap();
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.section, "St. Agnes");
        assert!(profile.profile_picture_url.is_none());
    }

    #[test]
    fn test_decode_rejects_malformed_payload() {
        let result: Result<Profile, AuthError> = PortalClient::decode_response(b"not json");
        assert!(matches!(result, Err(AuthError::Decode(_))));
    }
}
