use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::{Button, Spinner};
use crate::flows::verify::{schedule_redirect, verify_magic_link, VerifyStatus};
use crate::timer::ScheduledNavigation;
use crate::{use_api, use_session};

use super::VIEWS_CSS;

/// Landing page of a magic link.
///
/// Verifies `token` once per mount. On success the user is stored in the
/// session and `on_redirect` fires after a short pause, unless the view is
/// unmounted first.
#[component]
pub fn VerifyView(
    #[props(!optional)] token: Option<String>,
    on_redirect: EventHandler<()>,
    on_back: EventHandler<()>,
) -> Element {
    let client = use_api();
    let mut session = use_session();
    let mut status = use_signal(|| VerifyStatus::Verifying);
    // Dropping the guard with the view cancels a pending redirect.
    let redirect = use_hook(|| Rc::new(RefCell::new(None::<ScheduledNavigation>)));

    use_hook(move || {
        let auth = client.auth();
        spawn(async move {
            let outcome = verify_magic_link(&auth, token.as_deref()).await;
            if let Some(user) = outcome.user() {
                session.write().user = Some(user.clone());
            }
            let scheduled = schedule_redirect(&outcome, move || on_redirect.call(()));
            status.set(outcome);
            if let Some((guard, fire)) = scheduled {
                redirect.borrow_mut().replace(guard);
                spawn(fire);
            }
        })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page-center",
            div {
                class: "narrow",
                div {
                    class: "card text-center",
                    {match status() {
                        VerifyStatus::Verifying => rsx! {
                            Spinner {}
                            h2 { class: "card-title", "Verifying Your Link" }
                            p { class: "muted", "Please wait while we verify your magic link..." }
                        },
                        VerifyStatus::Success(user) => {
                            let name = user.display_name().to_string();
                            rsx! {
                                div { class: "badge-icon badge-icon-success", "✓" }
                                h2 { class: "card-title", "Welcome Back, {name}!" }
                                p { class: "muted mb-4", "You've been successfully authenticated." }
                                div {
                                    class: "detail-box",
                                    p {
                                        span { class: "font-medium", "Email: " }
                                        "{user.email}"
                                    }
                                    p {
                                        span { class: "font-medium", "Role: " }
                                        span { class: "capitalize", "{user.role}" }
                                    }
                                }
                                p { class: "hint mt-4", "Redirecting to dashboard..." }
                            }
                        }
                        VerifyStatus::Error(message) => rsx! {
                            div { class: "badge-icon badge-icon-error", "✕" }
                            h2 { class: "card-title", "Verification Failed" }
                            p { class: "error-text mb-4", "{message}" }
                            Button {
                                onclick: move |_| on_back.call(()),
                                "Back to Login"
                            }
                        },
                    }}
                }
            }
        }
    }
}
