//! account-forms - Entry Point
//!
//! Reads registration and login submits from stdin, one per line. Alerts are
//! written to stdout and the error display to stderr.

use log::info;
use tokio::io::BufReader;

use account_forms::Session;
use account_forms::error::FormError;
use account_forms::error::handlers::handle_error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), FormError> {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching account forms...");

    let mut session = Session::load().inspect_err(handle_error)?;
    session
        .run(
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
            tokio::io::stderr(),
        )
        .await
        .inspect_err(handle_error)?;

    info!("Session finished");
    Ok(())
}
