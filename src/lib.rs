//! Notes and tasks in the terminal.
//!
//! The [`store::Store`] owns every note and task for the session and is shared with the
//! home screen ([`home`]) and the editor ([`editor`]) through the [`store::NoteBook`] trait.
//! Nothing is written to disk.

pub mod app;
pub mod config;
pub mod editor;
pub mod error;
pub mod home;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
