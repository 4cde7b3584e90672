use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use pwy_annotate::{batch_correlate_annotate, BatchOptions, DEFAULT_OUTPUT_FILENAME};

fn print_usage() {
    println!("\nPathway/RPKM Batch Data Correlator");
    println!("\nJoins per-sample pathway, RPKM, and annotation files found in a");
    println!("directory into one tab-separated report.");
    println!("\nUsage: pwy-annotate <input-directory> [output-file]");
    println!("\n  <input-directory>  directory containing the per-sample input files");
    println!("  [output-file]      report destination (default: {DEFAULT_OUTPUT_FILENAME})");
    println!("  --help             print this message and exit");
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&[
                "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏",
            ])
            .template("{spinner:.green} {msg}")
            .expect("Invalid spinner template"),
    );
    spinner.set_message(message.to_string());
    spinner
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--help") {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let (input_dir, output_path) = match args.as_slice() {
        [dir] => (PathBuf::from(dir), PathBuf::from(DEFAULT_OUTPUT_FILENAME)),
        [dir, output] => (PathBuf::from(dir), PathBuf::from(output)),
        _ => {
            print_usage();
            return ExitCode::SUCCESS;
        }
    };

    let options = BatchOptions {
        output_path: output_path.clone(),
        ..BatchOptions::default()
    };

    let progress = spinner("Correlating pathway, RPKM, and annotation data...");
    match batch_correlate_annotate(&input_dir, &options) {
        Ok(batch) => {
            progress.finish_with_message(format!(
                "Wrote {} rows to {}",
                batch.rows.len(),
                output_path.display()
            ));
            println!(
                "Processed {} pathway ORF entries, {} RPKM data points, {} total annotations.",
                batch.totals.pathway_orfs, batch.totals.datapoints, batch.totals.annotations
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            progress.finish_and_clear();
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
