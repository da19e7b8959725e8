//! Headless views.
//!
//! Each view owns the state a screen renders from and the async actions that
//! change it. Markup is left to whatever front end drives them.

pub mod chat;
pub mod dashboard;
pub mod login;
pub mod signup;
pub mod widget_preview;

pub use chat::ChatScreen;
pub use dashboard::{Dashboard, DashboardSummary};
pub use login::LoginForm;
pub use signup::SignupForm;
pub use widget_preview::WidgetPreview;
