mod input;
mod nav_bar;
mod status_bar;

pub use input::TextInput;
pub use nav_bar::{NavBar, NavBarStyle};
pub use status_bar::{StatusBar, StatusLevel};
