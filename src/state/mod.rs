//! Application state module

mod app_state;
mod csv;
mod forms;
mod toast;

pub use app_state::*;
pub use csv::*;
pub use forms::*;
pub use toast::*;
