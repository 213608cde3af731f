mod engine;
use engine::compiler;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(name = "texpdf", version)]
struct Args {
    /// Path to the .tex file
    #[arg(default_value = "main.tex")]
    input: PathBuf,

    /// Name for the output PDF, without the .pdf extension
    #[arg(default_value = "notes")]
    output: String,

    /// LaTeX engine to invoke
    #[arg(long, default_value = "pdflatex")]
    engine: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = if verbose { "texpdf=debug,info" } else { "texpdf=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);
    tracing::debug!(?args, "parsed arguments");

    match compiler::compile(&args.input, &args.output, &args.engine) {
        Ok(()) => println!("PDF successfully generated: {}.pdf", args.output),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
