//! Form controller
//!
//! Handles submit events for the registration and login forms: runs the
//! validators, reports through the error sink, and reads or writes the
//! credential store.

use log::{debug, info, warn};

use crate::auth::{
    CredentialStore, UserRecord, ValidationRules, validate_email, validate_password,
    validate_terms, validate_username,
};
use crate::controller::{ErrorPolicy, LoginOutcome, RegistrationOutcome, SubmitState};
use crate::error::{FormError, ValidationError};
use crate::forms::{LoginForm, RegistrationForm};
use crate::ui::{ErrorSink, FirstErrorOnly, Notifier};

const REGISTRATION_SUCCESS: &str = "Registration successful!";
const LOGIN_SUCCESS: &str = "Login successful!";
const LOGIN_PERSIST_SUFFIX: &str = " You will remain logged in.";

/// Binds the validators to the two forms' submit events.
///
/// Owns the credential store; one submit runs to completion before the next.
pub struct FormController<C> {
    credentials: C,
    rules: ValidationRules,
    policy: ErrorPolicy,
    state: SubmitState,
}

impl<C: CredentialStore> FormController<C> {
    pub fn new(credentials: C, rules: ValidationRules, policy: ErrorPolicy) -> Self {
        Self {
            credentials,
            rules,
            policy,
            state: SubmitState::Idle,
        }
    }

    /// State reached by the most recent submit.
    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn credentials(&self) -> &C {
        &self.credentials
    }

    fn transition(&mut self, next: SubmitState) {
        debug!("Submit state {} -> {}", self.state, next);
        self.state = next;
    }

    /// Handles a registration submit.
    ///
    /// All four validators run on every submit; later ones use the values the
    /// earlier ones returned. The record is stored only when every one of
    /// them passed. `Err` is reserved for store faults.
    pub fn submit_registration(
        &mut self,
        form: &mut RegistrationForm,
        sink: &mut dyn ErrorSink,
        notifier: &mut dyn Notifier,
    ) -> Result<RegistrationOutcome, FormError> {
        self.transition(SubmitState::Validating);
        sink.clear_error();

        let mut first_only;
        let sink: &mut dyn ErrorSink = match self.policy {
            ErrorPolicy::LastWins => sink,
            ErrorPolicy::FirstWins => {
                first_only = FirstErrorOnly::new(sink);
                &mut first_only
            }
        };

        let username = validate_username(&form.username, &self.rules, &self.credentials, sink);
        let email = validate_email(&form.email, &self.rules, sink);
        let password = validate_password(
            &form.password,
            &form.password_check,
            username.as_deref().ok(),
            &self.rules,
            sink,
        );
        let terms = validate_terms(form.terms, sink);

        match (username, email, password, terms) {
            (Ok(username), Ok(email), Ok(password), Ok(())) => {
                let record = UserRecord { email, password };
                if let Err(e) = self.credentials.insert(&username, &record) {
                    self.transition(SubmitState::Failed);
                    return Err(e.into());
                }

                info!("Registered user {}", username);
                form.reset();
                notifier.alert(REGISTRATION_SUCCESS);
                self.transition(SubmitState::Success);

                Ok(RegistrationOutcome {
                    state: SubmitState::Success,
                    username: Some(username),
                    failures: Vec::new(),
                })
            }
            (username, email, password, terms) => {
                let failures: Vec<ValidationError> =
                    [username.err(), email.err(), password.err(), terms.err()]
                        .into_iter()
                        .flatten()
                        .collect();

                warn!(
                    "Registration rejected with {} failing field(s)",
                    failures.len()
                );
                self.transition(SubmitState::Failed);

                Ok(RegistrationOutcome {
                    state: SubmitState::Failed,
                    username: None,
                    failures,
                })
            }
        }
    }

    /// Handles a login submit.
    ///
    /// Stops at the first problem. A wrong password, an unknown user and an
    /// unreadable record all produce the same message.
    pub fn submit_login(
        &mut self,
        form: &mut LoginForm,
        sink: &mut dyn ErrorSink,
        notifier: &mut dyn Notifier,
    ) -> LoginOutcome {
        self.transition(SubmitState::Validating);
        sink.clear_error();

        let username = form.username.trim().to_lowercase();

        let failure = if username.is_empty() {
            Some(ValidationError::UsernameBlank)
        } else if form.password.is_empty() {
            Some(ValidationError::PasswordBlank)
        } else if !self.credentials.verify(&username, &form.password) {
            Some(ValidationError::InvalidCredentials)
        } else {
            None
        };

        if let Some(err) = failure {
            sink.show_error(&err.message(), err.field());
            warn!("Login rejected for '{}': {:?}", username, err);
            self.transition(SubmitState::Failed);

            return LoginOutcome {
                state: SubmitState::Failed,
                username: None,
                persist: false,
                failure: Some(err),
            };
        }

        let persist = form.persist;
        form.reset();

        let message = if persist {
            format!("{}{}", LOGIN_SUCCESS, LOGIN_PERSIST_SUFFIX)
        } else {
            LOGIN_SUCCESS.to_string()
        };
        notifier.alert(&message);

        info!("User {} logged in (persist: {})", username, persist);
        self.transition(SubmitState::Success);

        LoginOutcome {
            state: SubmitState::Success,
            username: Some(username),
            persist,
            failure: None,
        }
    }
}
