//! Login view - validated credential form backed by the simulated exchange.
//!
//! Validation runs on every change but errors only show once a field has
//! been touched (blur or a submit attempt). Submit stays disabled while the
//! form is invalid or a login is in flight.

use dioxus::prelude::*;
use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::ui::presentation::components::POKEBALL_ICON;
use crate::ui::presentation::services::use_auth_service;
use crate::ui::presentation::state::SessionState;
use crate::ui::routes::Route;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

const MIN_PASSWORD_LEN: usize = 6;

/// Validation message for the email field, `None` when valid.
pub fn validate_email(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("El correo electrónico es requerido");
    }
    if !EMAIL_RE.is_match(value) {
        return Some("Ingrese un correo electrónico válido");
    }
    None
}

/// Validation message for the password field, `None` when valid.
pub fn validate_password(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("La contraseña es requerida");
    }
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Some("La contraseña debe tener al menos 6 caracteres");
    }
    None
}

#[component]
pub fn Login() -> Element {
    let auth = use_auth_service();
    let session = use_context::<SessionState>();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut email_touched = use_signal(|| false);
    let mut password_touched = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let email_error = validate_email(&email.read());
    let password_error = validate_password(&password.read());
    let form_valid = email_error.is_none() && password_error.is_none();

    let submit = move |event: Event<FormData>| {
        event.prevent_default();
        email_touched.set(true);
        password_touched.set(true);
        if !form_valid || *loading.peek() {
            return;
        }
        loading.set(true);

        let auth = auth.clone();
        let mut session = session.clone();
        spawn(async move {
            let (email, password) = (email.peek().clone(), password.peek().clone());
            match auth.login(&email, &password).await {
                Ok(principal) => {
                    session.set_user(Some(principal));
                    nav.push(Route::Home {});
                }
                Err(error) => {
                    // The form stays filled in and ready for a retry.
                    tracing::error!(%error, "login failed");
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "login-page",
            div {
                class: "login-card",
                div {
                    class: "login-header",
                    img {
                        class: "login-icon",
                        src: POKEBALL_ICON,
                        alt: "Pokeball",
                    }
                    h2 { "Iniciar Sesión" }
                }
                form {
                    onsubmit: submit,
                    div {
                        class: "form-group",
                        label {
                            r#for: "email",
                            "Correo electrónico"
                            span {
                                class: "help-icon",
                                title: "Formato: ejemplo@dominio.com",
                                "?"
                            }
                        }
                        input {
                            id: "email",
                            r#type: "email",
                            class: if email_touched() && email_error.is_some() { "form-control is-invalid" } else { "form-control" },
                            value: "{email}",
                            placeholder: "ejemplo@dominio.com",
                            oninput: move |e| email.set(e.value()),
                            onblur: move |_| email_touched.set(true),
                        }
                        if email_touched() {
                            if let Some(message) = email_error {
                                div { class: "field-error", "{message}" }
                            }
                        }
                    }
                    div {
                        class: "form-group",
                        label {
                            r#for: "password",
                            "Contraseña"
                            span {
                                class: "help-icon",
                                title: "Mínimo 6 caracteres",
                                "?"
                            }
                        }
                        input {
                            id: "password",
                            r#type: "password",
                            class: if password_touched() && password_error.is_some() { "form-control is-invalid" } else { "form-control" },
                            value: "{password}",
                            placeholder: "******",
                            oninput: move |e| password.set(e.value()),
                            onblur: move |_| password_touched.set(true),
                        }
                        if password_touched() {
                            if let Some(message) = password_error {
                                div { class: "field-error", "{message}" }
                            }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-block",
                        disabled: loading() || !form_valid,
                        if loading() { "Iniciando sesión..." } else { "Iniciar Sesión" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod email_validation_tests {
        use super::*;

        #[test]
        fn empty_email_is_required() {
            assert_eq!(validate_email(""), Some("El correo electrónico es requerido"));
        }

        #[test]
        fn malformed_emails_are_rejected() {
            for bad in ["plain", "a@b", "a b@c.d", "a@b c.d", "@b.c", "a@.c"] {
                assert!(validate_email(bad).is_some(), "{bad} should be invalid");
            }
        }

        #[test]
        fn wellformed_emails_pass() {
            assert_eq!(validate_email("x@y.z"), None);
            assert_eq!(validate_email("ash@kanto.example"), None);
        }
    }

    mod password_validation_tests {
        use super::*;

        #[test]
        fn empty_password_is_required() {
            assert_eq!(validate_password(""), Some("La contraseña es requerida"));
        }

        #[test]
        fn five_characters_are_too_short() {
            assert!(validate_password("12345").is_some());
        }

        #[test]
        fn six_characters_pass() {
            assert_eq!(validate_password("123456"), None);
            assert_eq!(validate_password("pikachu"), None);
        }
    }
}
