//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers over a seeded in-memory
//! store and making HTTP requests as a given user.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tuiter_api::{create_app, create_memory_app_state};
use tuiter_common::{AppConfig, JwtService};
use tuiter_core::Id;
use tuiter_db::MemoryStore;

/// Secret shared by the server and the token helper
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: MemoryStore,
    jwt: JwtService,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server over an empty store
    pub async fn start() -> Result<Self> {
        Self::start_with_store(MemoryStore::new()).await
    }

    /// Start a test server over an existing store
    pub async fn start_with_store(store: MemoryStore) -> Result<Self> {
        let config = test_config()?;
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry);

        let state = create_memory_app_state(config, store.clone())?;
        let app = create_app(state)?;

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            store,
            jwt,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Issue a bearer token for a user
    pub fn token_for(&self, user_id: Id) -> String {
        self.jwt
            .issue_access_token(user_id)
            .expect("Failed to issue token")
    }

    fn with_auth(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        self.get_as(path, None).await
    }

    /// Make a GET request with an optional auth token
    pub async fn get_as(&self, path: &str, token: Option<&str>) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(Self::with_auth(self.client.get(&url), token).send().await?)
    }

    /// Make a PUT request with an optional auth token
    pub async fn put_as(&self, path: &str, token: Option<&str>) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(Self::with_auth(self.client.put(&url), token).send().await?)
    }

    /// Make a POST request with an optional auth token
    pub async fn post_as(&self, path: &str, token: Option<&str>) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(Self::with_auth(self.client.post(&url), token).send().await?)
    }

    /// Make a DELETE request with an optional auth token
    pub async fn delete_as(&self, path: &str, token: Option<&str>) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(Self::with_auth(self.client.delete(&url), token).send().await?)
    }
}

/// Create a test configuration for the memory backend
pub fn test_config() -> Result<AppConfig> {
    let config = AppConfig::from_lookup(|key| match key {
        "STORE_BACKEND" => Some("memory".to_string()),
        "JWT_SECRET" => Some(TEST_JWT_SECRET.to_string()),
        "RATE_LIMIT_BURST" => Some("10000".to_string()),
        "RATE_LIMIT_REQUESTS_PER_SECOND" => Some("1000".to_string()),
        _ => None,
    })
    .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
