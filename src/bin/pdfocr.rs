//! OCR-based PDF text extraction CLI.
//!
//! Renders each page and recognizes it with Tesseract. The result goes
//! to stdout either way: extraction failures are reported in-band as an
//! `Error: ...` line and the process still exits 0.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use pdftext::config::Settings;
use pdftext::OcrExtractor;

#[derive(Parser)]
#[command(name = "pdfocr", about = "Extract text from a PDF with OCR", version)]
struct Cli {
    /// Path to the PDF file
    pdf_path: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors exit 1; help and version keep clap's exit 0.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            process::exit(code);
        }
    };

    pdftext::logging::init(cli.verbose);

    let settings = Settings::load();
    let extractor = OcrExtractor::from_settings(&settings);

    match extractor.extract(&cli.pdf_path) {
        Ok(text) => println!("{}", text),
        Err(err) => println!("Error: {}", err),
    }
}
