//! Direct PDF text extraction CLI.
//!
//! Prints the PDF's embedded text layer to stdout. Any failure prints a
//! single error line to stderr and exits 1; nothing goes to stdout in
//! that case.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use pdftext::extract::direct;

#[derive(Parser)]
#[command(name = "pdftext", about = "Extract the text layer from a PDF", version)]
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

    match direct::extract_text(&cli.pdf_path) {
        Ok(text) => println!("{}", text),
        Err(err) => {
            eprintln!("Error extracting text from PDF: {}", err);
            process::exit(1);
        }
    }
}
