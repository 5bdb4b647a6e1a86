//! Docsmith - small document and text utilities
//!
//! Runs a short walkthrough of the library using the user's config.

use anyhow::Result;
use docsmith::core::config::Config;
use docsmith::format::formats::convert_file_format;
use docsmith::logger::args_logger;
use docsmith::markdown::convert::convert_md_to_txt;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let config = Config::load().unwrap_or_default();

    let level = config.log_level.parse().unwrap_or(LevelFilter::INFO);
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(level)
        .init();

    tracing::info!("Starting Docsmith...");

    println!("{}", config.title.stylize("Docsmith\nsmall tools for documents"));

    let markdown = "# Release notes\nEverything is faster\n## Fixes\nNothing broke";
    println!("{}", convert_md_to_txt(markdown));

    for (filename, target) in [("report.docx", "pdf"), ("notes.md", "pptx")] {
        match convert_file_format(filename, target) {
            Some(converted) => println!("{filename} -> {converted}"),
            None => println!("{filename} cannot become {target}"),
        }
    }

    args_logger(
        &[&"report.docx", &3],
        &[("title_width", &config.title.width), ("log_level", &config.log_level)],
    );

    Ok(())
}
