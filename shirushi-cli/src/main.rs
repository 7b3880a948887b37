//! Shirushi command-line entry point

use clap::{Parser, Subcommand};
use shirushi_cli::commands::LabelArgs;

#[derive(Parser)]
#[command(
    name = "shirushi",
    version,
    about = "Dictionary-based sequence labeling",
    long_about = "Tags dictionary phrase occurrences in text documents and emits \
                  IOB2, BILOU, IOBES, or raw JSON span annotations."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tag documents with dictionary matches
    Label(LabelArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Label(args) => args.execute(),
    };
    if let Err(error) = result {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
