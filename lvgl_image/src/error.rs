/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use alloc::string::String;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("image dimensions must be positive, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("a {width}x{height} image needs {expected} pixels, got {actual}")]
    PixelCount {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("rgba buffer of {len} bytes is not a whole number of pixels")]
    RaggedBuffer { len: usize },

    #[error("{width}x{height} does not fit in an lvgl image header")]
    TooLarge { width: u32, height: u32 },

    #[error("`{0}` is not a valid C identifier")]
    InvalidName(String),
}

pub type Result<T> = core::result::Result<T, Error>;
