use dioxus::prelude::*;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

mod login;
pub use login::LoginView;

mod verify;
pub use verify::VerifyView;

mod dashboard;
pub use dashboard::DashboardView;

mod ingredients;
pub use ingredients::IngredientsView;
