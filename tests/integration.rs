use account_forms::auth::{CredentialStore, PlaintextCredentials, ValidationRules};
use account_forms::controller::{ErrorPolicy, FormController, SubmitState};
use account_forms::error::ValidationError;
use account_forms::forms::{Field, LoginForm, RegistrationForm};
use account_forms::storage::{FileStore, MemoryStore, UserStore};
use account_forms::ui::{Alerts, ErrorDisplay};

// Helper to build a controller over an in-memory store
fn memory_controller() -> FormController<PlaintextCredentials<MemoryStore>> {
    FormController::new(
        PlaintextCredentials::new(MemoryStore::new()),
        ValidationRules::default(),
        ErrorPolicy::LastWins,
    )
}

// Helper to submit a registration and return the displayed error, if any
fn register<C: CredentialStore>(
    controller: &mut FormController<C>,
    username: &str,
    email: &str,
    password: &str,
    check: &str,
) -> Option<String> {
    let mut display = ErrorDisplay::new();
    let mut form = RegistrationForm {
        username: username.into(),
        email: email.into(),
        password: password.into(),
        password_check: check.into(),
        terms: true,
    };
    controller
        .submit_registration(&mut form, &mut display, &mut Alerts::new())
        .unwrap();
    display.message().map(str::to_string)
}

fn login<C: CredentialStore>(
    controller: &mut FormController<C>,
    username: &str,
    password: &str,
) -> (SubmitState, Option<String>) {
    let mut display = ErrorDisplay::new();
    let mut form = LoginForm {
        username: username.into(),
        password: password.into(),
        persist: false,
    };
    let outcome = controller.submit_login(&mut form, &mut display, &mut Alerts::new());
    (outcome.state, display.message().map(str::to_string))
}

#[test]
fn test_short_usernames_fail_with_length_message() {
    let mut controller = memory_controller();
    for username in ["a", "ab", "a1b"] {
        let shown = register(
            &mut controller,
            username,
            "someone@mail.com",
            "StrongPass123!",
            "StrongPass123!",
        );
        assert_eq!(
            shown.as_deref(),
            Some("Username must be at least 4 characters long.")
        );
    }
    assert_eq!(controller.state(), SubmitState::Failed);
}

#[test]
fn test_single_character_username_fails_uniqueness() {
    let mut controller = memory_controller();
    let shown = register(
        &mut controller,
        "aaaa",
        "someone@mail.com",
        "StrongPass123!",
        "StrongPass123!",
    );
    assert_eq!(
        shown.as_deref(),
        Some("Username must contain at least two unique characters.")
    );
}

#[test]
fn test_taken_username_regardless_of_case() {
    let mut controller = memory_controller();
    assert_eq!(
        register(&mut controller, "bob1", "bob1@mail.com", "StrongPass123!", "StrongPass123!"),
        None
    );
    let shown = register(
        &mut controller,
        "BoB1",
        "bob2@mail.com",
        "StrongPass123!",
        "StrongPass123!",
    );
    assert_eq!(shown.as_deref(), Some("That username is already taken."));
}

#[test]
fn test_password_containing_password_rejected() {
    let mut controller = memory_controller();
    let shown = register(&mut controller, "dave9", "dave@mail.com", "Password123!", "Password123!");
    assert_eq!(
        shown.as_deref(),
        Some("Password cannot contain 'password' or the username.")
    );
}

#[test]
fn test_password_containing_username_rejected() {
    let mut controller = memory_controller();
    let shown = register(
        &mut controller,
        "alice",
        "alice@mail.com",
        "AliceSecure!@3",
        "AliceSecure!@3",
    );
    assert_eq!(
        shown.as_deref(),
        Some("Password cannot contain 'password' or the username.")
    );
}

#[test]
fn test_strong_but_different_passwords() {
    let mut controller = memory_controller();
    let shown = register(
        &mut controller,
        "erin5",
        "erin@mail.com",
        "StrongPass123!",
        "OtherStrong456?",
    );
    assert_eq!(shown.as_deref(), Some("Passwords must match."));
    assert!(controller.credentials().store().is_empty());
}

#[test]
fn test_blocked_domain_rejected() {
    let mut controller = memory_controller();
    let shown = register(
        &mut controller,
        "frank1",
        "frank@example.com",
        "StrongPass123!",
        "StrongPass123!",
    );
    assert_eq!(
        shown.as_deref(),
        Some("Please enter a valid email address and avoid using 'example.com'.")
    );
}

#[test]
fn test_register_then_login_round_trip() {
    let mut controller = memory_controller();
    assert_eq!(
        register(&mut controller, "bob1", "bob1@mail.com", "StrongPass123!", "StrongPass123!"),
        None
    );

    let (state, shown) = login(&mut controller, "bob1", "StrongPass123!");
    assert_eq!(state, SubmitState::Success);
    assert_eq!(shown, None);

    let (state, shown) = login(&mut controller, "bob1", "StrongPass123?");
    assert_eq!(state, SubmitState::Failed);
    assert_eq!(shown.as_deref(), Some("Invalid username or password."));

    let (_, unknown_user) = login(&mut controller, "bob2", "StrongPass123!");
    assert_eq!(unknown_user, shown);
}

#[test]
fn test_file_store_keeps_users_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");

    {
        let mut controller = FormController::new(
            PlaintextCredentials::new(FileStore::open(&path).unwrap()),
            ValidationRules::default(),
            ErrorPolicy::LastWins,
        );
        assert_eq!(
            register(&mut controller, "bob1", "bob1@mail.com", "StrongPass123!", "StrongPass123!"),
            None
        );
    }

    let mut controller = FormController::new(
        PlaintextCredentials::new(FileStore::open(&path).unwrap()),
        ValidationRules::default(),
        ErrorPolicy::LastWins,
    );
    let (state, _) = login(&mut controller, "BOB1", "StrongPass123!");
    assert_eq!(state, SubmitState::Success);

    let shown = register(&mut controller, "bob1", "x@mail.com", "StrongPass123!", "StrongPass123!");
    assert_eq!(shown.as_deref(), Some("That username is already taken."));
}

#[test]
fn test_corrupt_record_is_invalid_credentials() {
    let mut store = MemoryStore::new();
    store.set_item("bob1", "garbage".into()).unwrap();
    let mut controller = FormController::new(
        PlaintextCredentials::new(store),
        ValidationRules::default(),
        ErrorPolicy::LastWins,
    );

    let (state, shown) = login(&mut controller, "bob1", "garbage");
    assert_eq!(state, SubmitState::Failed);
    assert_eq!(shown.as_deref(), Some("Invalid username or password."));
}

#[test]
fn test_error_policies_pick_different_messages() {
    let form = || RegistrationForm {
        username: "zz".into(),
        email: "zz@mail.com".into(),
        password: "StrongPass123!".into(),
        password_check: "StrongPass123!".into(),
        terms: false,
    };

    for (policy, expected, focus) in [
        (ErrorPolicy::LastWins, "You must agree to the Terms of Use.", Field::Terms),
        (
            ErrorPolicy::FirstWins,
            "Username must be at least 4 characters long.",
            Field::Username,
        ),
    ] {
        let mut controller = FormController::new(
            PlaintextCredentials::new(MemoryStore::new()),
            ValidationRules::default(),
            policy,
        );
        let mut display = ErrorDisplay::new();
        let outcome = controller
            .submit_registration(&mut form(), &mut display, &mut Alerts::new())
            .unwrap();

        assert_eq!(
            outcome.failures,
            vec![
                ValidationError::UsernameTooShort { min: 4 },
                ValidationError::TermsNotAccepted
            ]
        );
        assert_eq!(display.message(), Some(expected));
        assert_eq!(display.focused(), Some(focus));
    }
}

#[test]
fn test_custom_rules() {
    let rules = ValidationRules {
        min_username_length: 6,
        min_password_length: 16,
        blocked_email_domain: "mailinator.com".into(),
    };
    let mut controller = FormController::new(
        PlaintextCredentials::new(MemoryStore::new()),
        rules,
        ErrorPolicy::FirstWins,
    );

    assert_eq!(
        register(&mut controller, "bob1", "bob1@mail.com", "StrongPass123!", "StrongPass123!")
            .as_deref(),
        Some("Username must be at least 6 characters long.")
    );
    assert_eq!(
        register(&mut controller, "bobby1", "bob1@mail.com", "StrongPass123!", "StrongPass123!")
            .as_deref(),
        Some("Password must be at least 16 characters long.")
    );
    assert_eq!(
        register(&mut controller, "bobby1", "bob1@mailinator.com", "StrongPass123!xyz", "StrongPass123!xyz")
            .as_deref(),
        Some("Please enter a valid email address and avoid using 'mailinator.com'.")
    );
    assert_eq!(
        register(&mut controller, "bobby1", "bob1@example.com", "StrongPass123!xyz", "StrongPass123!xyz"),
        None
    );
}
