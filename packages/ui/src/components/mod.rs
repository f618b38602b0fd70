//! Shared building blocks for the views.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, Label};

mod modal;
pub use modal::Modal;

mod feedback;
pub use feedback::{Alert, AlertTone, Spinner};

use dioxus::prelude::manganis;

pub(crate) const COMPONENTS_CSS: dioxus::prelude::Asset =
    dioxus::prelude::asset!("/src/components/components.css");
