/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::path::PathBuf;

use clap::Parser;
use png_to_lvgl::{assets::DEFAULT_BASE_URL, decode::DEFAULT_SIZE, fetch::DEFAULT_TIMEOUT};

/// Download the weather icons, shrink them and emit LVGL RGB565A8 C sources.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Directory the generated `.c` files are written to
    #[arg(long, env = "LVGL_ICON_OUTPUT_DIR", default_value = "src")]
    pub output_dir: PathBuf,

    /// Directory downloaded originals are kept in
    #[arg(long, env = "LVGL_ICON_CACHE_DIR", default_value = "scripts/image_cache")]
    pub cache_dir: PathBuf,

    /// Edge length of the square output images, in pixels
    #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = clap::value_parser!(u32).range(1..=1024))]
    pub size: u32,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Download timeout per image, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Only convert these assets (repeatable)
    #[arg(long = "only", value_name = "NAME")]
    pub only: Vec<String>,

    /// Ignore the cache and download every image again
    #[arg(long)]
    pub refresh: bool,

    /// Print the asset table and exit
    #[arg(long)]
    pub list: bool,

    #[arg(short, long)]
    pub verbose: bool,
}
