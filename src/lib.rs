pub mod condition;
pub mod daily_summary;
pub mod errors;
pub mod handlers;
pub mod initialization;
pub mod logging;
pub mod manager_owm;

use crate::manager_owm::OWM;

/// Shared state handed to every request handler
pub struct AppState {
    pub owm: OWM,
}
