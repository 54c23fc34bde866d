use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use repack::io;
use repack::io::cli::Cli;
use repack::io::{svg_export, svg_import};
use shapepack::config::RepackConfig;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            RepackConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("Successfully parsed RepackConfig: {config:?}");

    let content = io::read_document(&args.input_file)?;
    let shapes = svg_import::read_shapes(&content, config.max_shapes)
        .with_context(|| format!("could not read shapes from {}", args.input_file.display()))?;

    let layout = shapepack::repack(shapes, &config)?;
    let document = svg_export::layout_to_svg(&layout, &config)?;

    io::write_svg(&document, args.output_file.as_deref())
}
