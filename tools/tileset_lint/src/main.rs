use std::path::PathBuf;

use bevy_cropland_schema::CatalogRules;
use clap::Parser;
use env_logger::Env;
use log::{error, info};
use tileset_lint::{lint_file, report_status};

fn main() {
    let args = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    std::process::exit(run(&args));
}

fn run(args: &Cli) -> i32 {
    let rules = match &args.root {
        Some(root) => CatalogRules::with_content_root(root),
        None => CatalogRules::default(),
    };

    let mut status = 0;
    let mut entries = Vec::new();
    let mut errors = 0;
    let mut warnings = 0;

    for path in &args.files {
        match lint_file(path, &rules) {
            Ok(report) => {
                errors += report.errors().count();
                warnings += report.warnings().count();
                status = status.max(report_status(&report, args.strict));
                if args.json {
                    entries.push(serde_json::json!({
                        "file": path.display().to_string(),
                        "findings": report.findings(),
                    }));
                } else {
                    for finding in report.findings() {
                        println!("{}: {}", path.display(), finding);
                    }
                }
            }
            Err(err) => {
                status = 2;
                if args.json {
                    entries.push(serde_json::json!({
                        "file": path.display().to_string(),
                        "error": err.to_string(),
                    }));
                } else {
                    error!("{}: {err}", path.display());
                }
            }
        }
    }

    if args.json {
        match serde_json::to_string_pretty(&entries) {
            Ok(output) => println!("{output}"),
            Err(err) => {
                error!("failed to serialize findings: {err}");
                return 2;
            }
        }
    } else {
        info!(
            "checked {} catalog(s): {} error(s), {} warning(s)",
            args.files.len(),
            errors,
            warnings
        );
    }

    status
}

#[derive(Parser)]
#[command(name = "Cropland Tileset Lint")]
#[command(about = "Checks level-editor tileset catalogs against the cropland schema", long_about = None)]
struct Cli {
    /// Content root that tile image paths must resolve under; image checks are skipped without it
    #[arg(short, long)]
    root: Option<PathBuf>,
    /// Emit one JSON document instead of a line per finding
    #[arg(short, long)]
    json: bool,
    /// Treat warnings like errors for the exit status
    #[arg(short, long)]
    strict: bool,
    /// Catalog files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,
}
