/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use lvgl_image::ImageArtifact;
use tempfile::NamedTempFile;

use crate::error::AssetError;

/// Writes `bytes` next to `path` and renames it into place, so readers only
/// ever see the old file or the complete new one.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

/// Emits `<dir>/<name>.c`, replacing whatever was there.
pub fn write_artifact(dir: &Path, artifact: &ImageArtifact) -> Result<PathBuf, AssetError> {
    let path = dir.join(artifact.file_name());
    let text = artifact.render();

    write_atomic(&path, text.as_bytes()).map_err(|source| AssetError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::debug!(path = %path.display(), len = text.len(), "wrote artifact");
    Ok(path)
}
