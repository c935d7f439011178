//! Command handlers
//!
//! Turns parsed commands into form submits on the controller and renders
//! what the page would show afterwards: the error display if it is visible,
//! otherwise any alerts.

use crate::auth::CredentialStore;
use crate::controller::FormController;
use crate::error::handlers::{error_to_display, handle_error};
use crate::forms::{LoginForm, RegistrationForm, SubmittedFields};
use crate::protocol::responses::{HELP_TEXT, format_alert, format_error};
use crate::protocol::{Command, CommandResult, CommandStatus};
use crate::ui::{Alerts, ErrorDisplay};

/// Dispatches a parsed command.
///
/// # Arguments
///
/// * `controller` - Controller owning the credential store.
/// * `command` - Parsed command.
/// * `display` - The shared error display.
/// * `alerts` - Pending alerts, drained into the response.
pub fn handle_command<C: CredentialStore>(
    controller: &mut FormController<C>,
    command: &Command,
    display: &mut ErrorDisplay,
    alerts: &mut Alerts,
) -> CommandResult {
    match command {
        Command::Register(fields) => handle_cmd_register(controller, fields, display, alerts),
        Command::Login(fields) => handle_cmd_login(controller, fields, display, alerts),
        Command::Help => CommandResult {
            status: CommandStatus::Success,
            message: Some(format!("{}\n", HELP_TEXT)),
        },
        Command::Quit => CommandResult {
            status: CommandStatus::CloseConnection,
            message: Some("bye\n".into()),
        },
        Command::Unknown(_) => CommandResult {
            status: CommandStatus::Failure("Unknown command".into()),
            message: Some(format_error("Unknown command")),
        },
    }
}

fn handle_cmd_register<C: CredentialStore>(
    controller: &mut FormController<C>,
    fields: &SubmittedFields,
    display: &mut ErrorDisplay,
    alerts: &mut Alerts,
) -> CommandResult {
    let mut form = RegistrationForm::from_fields(fields);

    match controller.submit_registration(&mut form, display, alerts) {
        Ok(outcome) if outcome.is_success() => success(alerts),
        Ok(_) => failure(display),
        Err(e) => {
            handle_error(&e);
            CommandResult {
                status: CommandStatus::Failure(e.to_string()),
                message: Some(format_error(error_to_display(&e))),
            }
        }
    }
}

fn handle_cmd_login<C: CredentialStore>(
    controller: &mut FormController<C>,
    fields: &SubmittedFields,
    display: &mut ErrorDisplay,
    alerts: &mut Alerts,
) -> CommandResult {
    let mut form = LoginForm::from_fields(fields);

    if controller.submit_login(&mut form, display, alerts).is_success() {
        success(alerts)
    } else {
        failure(display)
    }
}

fn success(alerts: &mut Alerts) -> CommandResult {
    let message: String = alerts.drain().iter().map(|a| format_alert(a)).collect();
    CommandResult {
        status: CommandStatus::Success,
        message: Some(message),
    }
}

fn failure(display: &ErrorDisplay) -> CommandResult {
    let shown = display.message().unwrap_or_default().to_string();
    CommandResult {
        message: Some(format_error(&shown)),
        status: CommandStatus::Failure(shown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{PlaintextCredentials, ValidationRules};
    use crate::controller::ErrorPolicy;
    use crate::protocol::parse_command;
    use crate::storage::MemoryStore;

    fn run(
        controller: &mut FormController<PlaintextCredentials<MemoryStore>>,
        line: &str,
    ) -> CommandResult {
        handle_command(
            controller,
            &parse_command(line),
            &mut ErrorDisplay::new(),
            &mut Alerts::new(),
        )
    }

    #[test]
    fn test_register_then_login() {
        let mut controller = FormController::new(
            PlaintextCredentials::new(MemoryStore::new()),
            ValidationRules::default(),
            ErrorPolicy::LastWins,
        );

        let result = run(
            &mut controller,
            "REGISTER username=bob1 email=bob1@mail.com password=StrongPass123! passwordCheck=StrongPass123! terms=on",
        );
        assert_eq!(result.status, CommandStatus::Success);
        assert_eq!(result.message.as_deref(), Some("alert: Registration successful!\n"));

        let result = run(&mut controller, "LOGIN username=bob1 password=StrongPass123!");
        assert_eq!(result.message.as_deref(), Some("alert: Login successful!\n"));

        let result = run(&mut controller, "LOGIN username=bob1 password=nope");
        assert_eq!(
            result.status,
            CommandStatus::Failure("Invalid username or password.".into())
        );
        assert_eq!(
            result.message.as_deref(),
            Some("error: Invalid username or password.\n")
        );
    }

    #[test]
    fn test_register_without_terms() {
        let mut controller = FormController::new(
            PlaintextCredentials::new(MemoryStore::new()),
            ValidationRules::default(),
            ErrorPolicy::LastWins,
        );

        let result = run(
            &mut controller,
            "REGISTER username=bob1 email=bob1@mail.com password=StrongPass123! passwordCheck=StrongPass123!",
        );
        assert_eq!(
            result.message.as_deref(),
            Some("error: You must agree to the Terms of Use.\n")
        );
    }

    #[test]
    fn test_quit_and_unknown() {
        let mut controller = FormController::new(
            PlaintextCredentials::new(MemoryStore::new()),
            ValidationRules::default(),
            ErrorPolicy::LastWins,
        );

        assert_eq!(run(&mut controller, "QUIT").status, CommandStatus::CloseConnection);
        assert_eq!(
            run(&mut controller, "LOGOUT").message.as_deref(),
            Some("error: Unknown command\n")
        );
    }
}
