/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::path::{Path, PathBuf};

use lvgl_image::ImageArtifact;
use tracing::{debug, error, info, warn};

use crate::{
    assets::{Asset, DEFAULT_BASE_URL},
    cache::ImageCache,
    decode::{self, DEFAULT_SIZE},
    error::AssetError,
    fetch::Fetcher,
    output,
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub converted: Vec<PathBuf>,
    pub failed: Vec<(&'static str, String)>,
}

impl BatchReport {
    pub fn success_count(&self) -> usize {
        self.converted.len()
    }

    pub fn error_count(&self) -> usize {
        self.failed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Cache-or-fetch, resize and emit, one asset at a time.
#[derive(Debug)]
pub struct Pipeline<F> {
    fetcher: F,
    cache: ImageCache,
    output_dir: PathBuf,
    base_url: String,
    size: u32,
    refresh: bool,
}

impl<F: Fetcher> Pipeline<F> {
    pub fn new(fetcher: F, cache: ImageCache, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            cache,
            output_dir: output_dir.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            size: DEFAULT_SIZE,
            refresh: false,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Ignore cached originals and download everything again.
    pub fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    fn source_bytes(&self, asset: &Asset) -> Result<Vec<u8>, AssetError> {
        if !self.refresh {
            let cached = self
                .cache
                .get(asset.filename)
                .map_err(|source| AssetError::Cache {
                    path: self.cache.path_for(asset.filename),
                    source,
                })?;

            if let Some(bytes) = cached {
                debug!(file = asset.filename, "cache hit");
                return Ok(bytes);
            }
        }

        let url = asset.url(&self.base_url);
        info!(%url, "downloading");
        let bytes = self.fetcher.fetch(&url)?;

        // the download is still usable when the cache can't be written
        if let Err(err) = self.cache.put(asset.filename, &bytes) {
            warn!(file = asset.filename, "failed to cache download: {err}");
        }

        Ok(bytes)
    }

    pub fn process(&self, asset: &Asset) -> Result<PathBuf, AssetError> {
        let bytes = self.source_bytes(asset)?;
        let grid = decode::load_grid(&bytes, self.size)?;
        let artifact = ImageArtifact::new(asset.name, &grid)?;

        output::write_artifact(&self.output_dir, &artifact)
    }

    pub fn run<'a>(&self, assets: impl IntoIterator<Item = &'a Asset>) -> BatchReport {
        let mut report = BatchReport::default();

        for asset in assets {
            info!(asset = asset.name, "processing");
            match self.process(asset) {
                Ok(path) => {
                    info!(asset = asset.name, path = %path.display(), "generated");
                    report.converted.push(path);
                }
                Err(err) => {
                    error!(asset = asset.name, "{err}");
                    report.failed.push((asset.name, err.to_string()));
                }
            }
        }

        report
    }
}
