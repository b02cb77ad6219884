//! Application state module

mod app_state;
mod forms;
mod loading_indicator;
mod page_state;

pub use app_state::*;
pub use forms::*;
pub use loading_indicator::*;
pub use page_state::*;
