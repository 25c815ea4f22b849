mod prompts;
mod report;
mod session;
mod table;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "skillet")]
#[command(about = "Recipe cost calculator", long_about = None)]
struct Cli {
    /// Directory reports are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Skip the instructions offer at startup
    #[arg(long)]
    no_instructions: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = prompts::Prompter::new(stdin.lock(), stdout.lock());

    session::run(&mut prompter, &cli.out_dir, cli.no_instructions)
}
