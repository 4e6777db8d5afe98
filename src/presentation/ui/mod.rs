//! UI screens.

mod app;
mod dashboard_screen;
mod form;
mod home_screen;
mod layout;
mod route;
mod sign_in_screen;
mod sign_up_screen;

pub use app::App;
pub use dashboard_screen::{DashboardScreen, DashboardState, ProfileState};
pub use form::{FormAction, FormFields};
pub use home_screen::HomeScreen;
pub use route::Route;
pub use sign_in_screen::{SignInScreen, SignInState};
pub use sign_up_screen::{SignUpScreen, SignUpState};
