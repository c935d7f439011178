use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::auth::{CredentialStore, PlaintextCredentials};
use crate::config::{AppConfig, CONFIG_PATHS};
use crate::controller::FormController;
use crate::error::FormError;
use crate::protocol::responses::format_error;
use crate::protocol::{Command, CommandStatus, handle_command, parse_command};
use crate::storage::{FileStore, MemoryStore, UserStore};
use crate::ui::{Alerts, ErrorDisplay};

const GREETING: &[u8] = b"account-forms ready. Type HELP for commands.\n";
const MAX_LINE_LENGTH: usize = 4096;

/// Credential store selected from configuration at startup.
pub type ConfiguredCredentials = PlaintextCredentials<Box<dyn UserStore>>;

/// One page worth of state: the controller, its error display, and pending alerts.
///
/// Lines are handled strictly one after another.
pub struct Session<C> {
    controller: FormController<C>,
    display: ErrorDisplay,
    alerts: Alerts,
}

impl Session<ConfiguredCredentials> {
    /// Loads configuration from the default locations and builds a session.
    pub fn load() -> Result<Self, FormError> {
        Self::load_from(CONFIG_PATHS)
    }

    /// Loads configuration from `paths` and builds a session.
    pub fn load_from(paths: &[&str]) -> Result<Self, FormError> {
        let config = AppConfig::load_from(paths)?;
        Self::from_config(&config)
    }

    /// Builds a session with the store named in `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, FormError> {
        let store: Box<dyn UserStore> = match config.store_path() {
            Some(path) => Box::new(FileStore::open(&path)?),
            None => {
                warn!("No store_path configured, registrations will not outlive this process");
                Box::new(MemoryStore::new())
            }
        };
        info!("Error policy: {:?}", config.error_policy);

        let controller = FormController::new(
            PlaintextCredentials::new(store),
            config.rules.clone(),
            config.error_policy,
        );

        Ok(Self::new(controller))
    }
}

impl<C: CredentialStore> Session<C> {
    pub fn new(controller: FormController<C>) -> Self {
        Self {
            controller,
            display: ErrorDisplay::new(),
            alerts: Alerts::new(),
        }
    }

    pub fn display(&self) -> &ErrorDisplay {
        &self.display
    }

    /// Reads commands from `reader` until `QUIT` or end of input.
    ///
    /// Alerts and other replies go to `writer`, the error display to
    /// `errors`. A bad line is reported and skipped; only I/O failures end
    /// the session.
    pub async fn run<R, W, E>(
        &mut self,
        mut reader: R,
        mut writer: W,
        mut errors: E,
    ) -> Result<(), FormError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        E: AsyncWrite + Unpin,
    {
        writer.write_all(GREETING).await?;
        writer.flush().await?;

        let mut buf = Vec::new();

        loop {
            buf.clear();
            let n = reader.read_until(b'\n', &mut buf).await?;
            if n == 0 {
                info!("Input closed");
                break;
            }

            if buf.len() > MAX_LINE_LENGTH {
                errors
                    .write_all(format_error("Line too long").as_bytes())
                    .await?;
                errors.flush().await?;
                continue;
            }

            let Ok(line) = std::str::from_utf8(&buf) else {
                warn!("Discarding input line that is not valid UTF-8");
                errors
                    .write_all(format_error("Invalid input").as_bytes())
                    .await?;
                errors.flush().await?;
                continue;
            };

            if line.trim().is_empty() {
                continue;
            }

            let command = parse_command(line);
            // Fields carry passwords; log only the verb.
            debug!("Received {}", command_name(&command));

            let result = handle_command(
                &mut self.controller,
                &command,
                &mut self.display,
                &mut self.alerts,
            );

            if let Some(msg) = result.message {
                match result.status {
                    CommandStatus::Failure(_) => {
                        errors.write_all(msg.as_bytes()).await?;
                        errors.flush().await?;
                    }
                    _ => {
                        writer.write_all(msg.as_bytes()).await?;
                        writer.flush().await?;
                    }
                }
            }

            if result.status == CommandStatus::CloseConnection {
                info!("Session closed by user");
                break;
            }
        }

        Ok(())
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Register(_) => "REGISTER",
        Command::Login(_) => "LOGIN",
        Command::Help => "HELP",
        Command::Quit => "QUIT",
        Command::Unknown(_) => "unknown command",
    }
}
