use clap::Parser as _;
use lastbreach_drv::{run_sim, Cli, Session};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    // Malformed flags exit 2 from inside `parse()`, satisfying the CLI
    // usage-error contract without reaching any of our own code.
    let cli = Cli::parse();
    init_logging(cli.verbose);

    tracing::debug!(?cli, "starting run");

    let mut session = match Session::new(cli) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    run_sim(&mut session);
}
