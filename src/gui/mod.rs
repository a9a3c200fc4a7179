mod app;
mod message;
mod state;
mod widgets;

pub use app::{TrackerApp, run};
pub use message::Message;
pub use state::AppState;
