//! Native `ShelfSource` over `reqwest`, for the CLI.

use log::debug;
use reqwest::{header, Client};
use std::time::Duration;

use crate::{error::ShelfError, refresher::ShelfSource, shelf::ShelfOption};

pub struct ReqwestShelfSource {
    client: Client,
    session_cookie: Option<String>,
}

impl ReqwestShelfSource {
    pub fn new(timeout: Duration) -> Result<Self, ShelfError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ShelfError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            session_cookie: None,
        })
    }

    /// Send an existing login session along (the endpoint is staff-only).
    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }
}

impl ShelfSource for ReqwestShelfSource {
    async fn fetch_shelves(&self, url: &str) -> Result<Vec<ShelfOption>, ShelfError> {
        let mut request = self.client.get(url);
        if let Some(cookie) = &self.session_cookie {
            request = request.header(header::COOKIE, cookie);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ShelfError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ShelfError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ShelfError::Transport(e.to_string()))?;
        debug!("{url} -> {} bytes", body.len());
        ShelfOption::parse_list(&body)
    }
}
