/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

pub mod assets;
pub mod batch;
pub mod cache;
pub mod decode;
pub mod error;
pub mod fetch;
pub mod output;

pub use assets::{ASSETS, Asset};
pub use batch::{BatchReport, Pipeline};
pub use cache::ImageCache;
pub use error::{AssetError, FetchError};
pub use fetch::{Fetcher, HttpFetcher};
