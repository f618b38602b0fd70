use dioxus::prelude::*;

use crate::components::{Alert, Button, ButtonVariant, Input, Label};
use crate::flows::login::{send_magic_link, LoginForm, LoginStatus};
use crate::use_api;

use super::VIEWS_CSS;

/// Passwordless sign-in: ask for an email, send a magic link.
#[component]
pub fn LoginView() -> Element {
    let client = use_api();
    let mut login = use_signal(LoginForm::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(request) = login.write().begin_submit() else {
            return;
        };
        let auth = client.auth();
        spawn(async move {
            let result = send_magic_link(&auth, &request).await;
            login.write().finish(result);
        });
    };

    let state = login();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page-center",
            div {
                class: "narrow",
                div {
                    class: "brand",
                    h1 { class: "brand-title", "🍳 SmartKitchen" }
                    p { class: "muted", "Your Personal Kitchen Assistant" }
                }

                div {
                    class: "card",
                    h2 { class: "card-title", "Welcome Back" }
                    p {
                        class: "muted mb-6",
                        "Enter your email to receive a magic link for passwordless login"
                    }

                    if let LoginStatus::Sent(sent) = &state.status {
                        div {
                            class: "sent-panel",
                            h3 { class: "sent-title", "Magic Link Sent!" }
                            p {
                                "Check your email at "
                                strong {
                                    if sent.email.is_empty() { "{state.email}" } else { "{sent.email}" }
                                }
                                " for your magic link. Click the link to sign in."
                            }
                            if let Some(minutes) = sent.expires_in_minutes {
                                p { class: "hint", "The link expires in {minutes} minutes." }
                            }
                            p {
                                class: "hint",
                                "For development: Check the backend console logs for the magic link token."
                            }
                            Button {
                                variant: ButtonVariant::Link,
                                class: "mt-3",
                                onclick: move |_| login.write().reset(),
                                "Send another link"
                            }
                        }
                    } else {
                        form {
                            class: "stack",
                            onsubmit: handle_submit,

                            div {
                                Label { html_for: "email", "Email Address" }
                                Input {
                                    id: "email",
                                    input_type: "email",
                                    required: true,
                                    value: state.email.clone(),
                                    placeholder: "you@example.com",
                                    disabled: state.is_loading(),
                                    oninput: move |evt: FormEvent| login.write().email = evt.value(),
                                }
                            }

                            div {
                                Label {
                                    html_for: "fullName",
                                    "Full Name "
                                    span { class: "muted", "(Optional)" }
                                }
                                Input {
                                    id: "fullName",
                                    value: state.full_name.clone(),
                                    placeholder: "John Doe",
                                    disabled: state.is_loading(),
                                    oninput: move |evt: FormEvent| login.write().full_name = evt.value(),
                                }
                            }

                            if let Some(error) = state.error() {
                                Alert { message: error.to_string() }
                            }

                            Button {
                                class: "w-full",
                                button_type: "submit",
                                disabled: state.is_loading(),
                                if state.is_loading() { "Sending Magic Link..." } else { "Send Magic Link" }
                            }
                        }
                    }

                    p {
                        class: "hint text-center mt-6",
                        "No password required. We'll send you a secure link to sign in."
                    }
                }

                p {
                    class: "hint text-center mt-8",
                    "Secure passwordless authentication powered by Magic Links"
                }
            }
        }
    }
}
