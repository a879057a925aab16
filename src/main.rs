use clap::Parser;
use greeter::cli::{Cli, run};
use greeter::logging;
use tracing::error;

fn main() {
    logging::init();
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    if let Err(err) = run(cli, &mut stdout.lock()) {
        error!("{err}");
        std::process::exit(1);
    }
}
