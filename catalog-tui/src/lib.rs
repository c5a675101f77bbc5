//! Catalog admin terminal UI
//!
//! List, detail, create and edit screens for the products API. Screens are
//! plain state machines that emit [`Command`]s; [`App`] runs them against a
//! [`catalog_client::ProductApi`].

pub mod app;
pub mod config;
pub mod debounce;
pub mod event;
pub mod form;
pub mod logger;
pub mod pages;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use event::{AppEvent, Command, Loadable, Outcome, Route};
pub use pages::Page;
