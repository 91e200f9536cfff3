use contact_book::prelude::{AppError, command::Cli, run_app};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    let cli = Cli::load();

    // Logs go to stderr, stdout belongs to the menu
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    run_app(&cli)
}
