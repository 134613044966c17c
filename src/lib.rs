pub mod app;
pub mod backend;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod poller;
pub mod settings;
pub mod state;
pub mod ui;

#[cfg(test)]
mod testing;

pub use app::{PageHandle, start};
pub use backend::{Backend, HttpBackend};
pub use clipboard::{ArboardClipboard, Clipboard, CopyHandler};
pub use config::resolve_base_url;
pub use poller::{POLL_PERIOD, Poller, PollerHandle};
pub use state::{ElementId, Page, Surface};
