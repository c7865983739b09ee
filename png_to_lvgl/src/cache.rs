/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::{fs, io, path::PathBuf};

use crate::output::write_atomic;

/// Downloaded originals, keyed by remote file name.
#[derive(Debug, Clone)]
pub struct ImageCache {
    dir: PathBuf,
}

impl ImageCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    pub fn get(&self, filename: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(filename)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub fn put(&self, filename: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        let path = self.path_for(filename);
        write_atomic(&path, bytes)?;
        Ok(path)
    }
}
