//! Page components for the two routes.

mod donate;
mod home;

pub use donate::DonatePage;
pub use home::HomePage;
