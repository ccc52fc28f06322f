use todolist::{commands::Cli, libs::messages::Message, msg_error};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(err) = Cli::menu() {
        msg_error!(Message::TaskCommandFailed(format!("{err:#}")));
        std::process::exit(1);
    }
}
