use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use shapepack::config::RepackConfig;
use svg::Document;

use crate::EPOCH;

pub mod cli;
pub mod path_data;
pub mod svg_export;
pub mod svg_import;

pub fn read_config(path: &Path) -> Result<RepackConfig> {
    let file = File::open(path)
        .with_context(|| format!("could not open config file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let config: RepackConfig =
        serde_json::from_reader(reader).context("incorrect config file format")?;
    config.validate()?;
    Ok(config)
}

pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("could not read input file: {}", path.display()))
}

/// Writes `document` to `path`, or to stdout if no path is given
pub fn write_svg(document: &Document, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            svg::save(path, document)
                .with_context(|| format!("could not write svg file: {}", path.display()))?;
            info!("[IO] svg written to file://{}", fs::canonicalize(path)?.display());
        }
        None => {
            svg::write(std::io::stdout().lock(), document).context("could not write svg to stdout")?;
        }
    }
    Ok(())
}

/// Installs the logger. Records go to stderr, stdout is reserved for the output document.
pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{:<27}{}", prefix, message))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stderr())
        .apply()?;
    info!("[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}
