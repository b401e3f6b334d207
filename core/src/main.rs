use clap::Parser;
use feretselect_core::cli::{Cli, OutputFormat};
use feretselect_core::{
    select_volumes, FilterConfig, ManifestWriter, TextReport, WalkSummary, FERET_VOLUMES,
};
use log::{error, info};
use std::fs::File;
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    // Verify the dataset root before touching the output file
    let dataset_root = match cli.checked_dataset_root() {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let filter = cli.filter_config();
    let options = cli.walk_options();

    let file = match File::create(&cli.dest) {
        Ok(file) => file,
        Err(e) => {
            error!("Failed to create {}: {}", cli.dest.display(), e);
            eprintln!("Error: Failed to create {}: {}", cli.dest.display(), e);
            process::exit(1);
        }
    };
    let mut writer = ManifestWriter::new(file);

    info!("Processing dataset: {}", dataset_root.display());

    match select_volumes(&dataset_root, &FERET_VOLUMES, &filter, options, &mut writer) {
        Ok(summary) => {
            info!(
                "Wrote {} lines to {}",
                writer.lines_written(),
                cli.dest.display()
            );
            output_summary(&summary, &filter, &cli.dest, cli.format);
        }
        Err(e) => {
            error!("Selection failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

fn output_summary(summary: &WalkSummary, filter: &FilterConfig, dest: &Path, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            let report = TextReport::new(summary, filter, dest);
            println!("{}", report);
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match output_json(summary, filter, dest) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}

#[cfg(feature = "json")]
fn output_json(
    summary: &WalkSummary,
    filter: &FilterConfig,
    dest: &Path,
) -> Result<String, serde_json::Error> {
    use serde::Serialize;

    #[derive(Serialize)]
    struct RunJson<'a> {
        manifest: String,
        filter: &'a FilterConfig,
        summary: &'a WalkSummary,
    }

    serde_json::to_string_pretty(&RunJson {
        manifest: dest.display().to_string(),
        filter,
        summary,
    })
}
