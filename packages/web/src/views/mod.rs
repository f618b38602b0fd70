mod login;
pub use login::Login;

mod verify;
pub use verify::Verify;

mod dashboard;
pub use dashboard::Dashboard;

mod ingredients;
pub use ingredients::Ingredients;
