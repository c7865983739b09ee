/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} not found")]
    NotFound { url: String },

    #[error("{url} returned an empty body")]
    Empty { url: String },
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("unknown asset `{0}`")]
    Unknown(String),

    #[error("download failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("cache error at {path}: {source}")]
    Cache {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("conversion failed: {0}")]
    Codec(#[from] lvgl_image::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
