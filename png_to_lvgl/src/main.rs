/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

mod cli;

use std::{process::ExitCode, time::Duration};

use clap::Parser;
use png_to_lvgl::{ASSETS, HttpFetcher, ImageCache, Pipeline, assets};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.list {
        for asset in ASSETS {
            println!("{:<40} {}", asset.name, asset.filename);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let selected = assets::select(&args.only)?;
    let fetcher = HttpFetcher::new(Duration::from_secs(args.timeout_secs))?;
    let pipeline = Pipeline::new(fetcher, ImageCache::new(&args.cache_dir), &args.output_dir)
        .with_base_url(args.base_url)
        .with_size(args.size)
        .with_refresh(args.refresh);

    println!("Resizing weather images to {0}x{0}...", pipeline.size());
    println!("Output directory: {}", pipeline.output_dir().display());
    println!();

    let report = pipeline.run(selected);

    println!();
    println!(
        "Done! {} images converted, {} errors",
        report.success_count(),
        report.error_count()
    );
    for (name, reason) in &report.failed {
        println!("  {name}: {reason}");
    }

    if report.success_count() > 0 {
        println!();
        println!("Now rebuild the project:");
        println!("  pio run");
    }

    Ok(if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
