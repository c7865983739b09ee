/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::time::Duration;

use reqwest::{StatusCode, blocking::Client};

use crate::error::FetchError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of raw image bytes.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(url)
    }
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("png_to_lvgl/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let http = |source| FetchError::Http {
            url: url.to_owned(),
            source,
        };

        let response = self.client.get(url).send().map_err(http)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                url: url.to_owned(),
            });
        }

        let bytes = response
            .error_for_status()
            .and_then(|response| response.bytes())
            .map_err(http)?;

        if bytes.is_empty() {
            return Err(FetchError::Empty {
                url: url.to_owned(),
            });
        }

        tracing::debug!(url, len = bytes.len(), "downloaded");
        Ok(bytes.to_vec())
    }
}
