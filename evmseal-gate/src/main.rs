use clap::Parser;

use evmseal_gate::cli;

fn main() {
    let cli = cli::Cli::parse();
    if let Err(e) = cli::run(cli) {
        tracing::error!("Fatal error: {}", e);
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
