//! Shared UI for the SmartKitchen web client.
//!
//! | Module | Contents |
//! |--------|----------|
//! | `flows` | Page state machines over the `api` gateways |
//! | `session` | API client and signed-in user context |
//! | `timer` | Platform sleep and cancellable delayed navigation |
//! | `components` | Buttons, inputs, modal, alerts |
//! | `views` | The four pages |

pub mod components;
pub mod flows;
pub mod timer;
pub mod views;

mod session;
pub use session::{use_api, use_session, SessionProvider, SessionState};

pub use views::{DashboardView, IngredientsView, LoginView, VerifyView};
