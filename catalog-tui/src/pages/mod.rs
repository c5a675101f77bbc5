//! Screens
//!
//! A page owns its state, turns keys and outcomes into [`Command`]s and
//! never performs I/O itself.

pub mod create;
pub mod detail;
pub mod edit;
pub mod editor;
pub mod list;

use std::time::Instant;

use crossterm::event::KeyEvent;

use crate::config::Config;
use crate::event::{Command, Outcome, Route};

pub use create::CreatePage;
pub use detail::DetailPage;
pub use edit::EditPage;
pub use editor::{EditorAction, FormEditor, SaveStatus};
pub use list::ListPage;

#[derive(Debug, Clone)]
pub enum Page {
    List(ListPage),
    Detail(DetailPage),
    Create(CreatePage),
    Edit(EditPage),
}

impl Page {
    pub fn new(route: Route, config: &Config) -> Self {
        match route {
            Route::List => Page::List(ListPage::new(config)),
            Route::Detail(id) => Page::Detail(DetailPage::new(id)),
            Route::Create => Page::Create(CreatePage::new()),
            Route::Edit(id) => Page::Edit(EditPage::new(id)),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Page::List(_) => Route::List,
            Page::Detail(p) => Route::Detail(p.product_id),
            Page::Create(_) => Route::Create,
            Page::Edit(p) => Route::Edit(p.product_id),
        }
    }

    /// Initial fetches for a freshly created page
    pub fn mount(&mut self) -> Vec<Command> {
        match self {
            Page::List(p) => p.mount(),
            Page::Detail(p) => p.mount(),
            Page::Create(_) => vec![],
            Page::Edit(p) => p.mount(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Vec<Command> {
        match self {
            Page::List(p) => p.handle_key(key, now),
            Page::Detail(p) => p.handle_key(key),
            Page::Create(p) => p.handle_key(key),
            Page::Edit(p) => p.handle_key(key),
        }
    }

    pub fn apply(&mut self, outcome: Outcome) -> Vec<Command> {
        match self {
            Page::List(p) => p.apply(outcome),
            Page::Detail(p) => p.apply(outcome),
            Page::Create(p) => p.apply(outcome),
            Page::Edit(p) => p.apply(outcome),
        }
    }

    /// Timer-driven work (search debounce)
    pub fn tick(&mut self, now: Instant) -> Vec<Command> {
        match self {
            Page::List(p) => p.tick(now),
            _ => vec![],
        }
    }
}
