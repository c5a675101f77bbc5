//! Runtime: routes keys to the mounted page and runs its commands
//!
//! Network commands run on their own tokio task. Results come back on an
//! mpsc channel tagged with the mount sequence number of the page that
//! asked; anything tagged with an older number is dropped.

use std::sync::Arc;
use std::time::Instant;

use catalog_client::{ClientError, ProductApi};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use tui_logger::TuiWidgetState;

use crate::config::Config;
use crate::event::{AppEvent, Command, Outcome, Route};
use crate::pages::Page;

pub const DELETE_FAILED: &str = "Failed to delete product";

pub struct App {
    api: Arc<dyn ProductApi>,
    config: Config,
    pub page: Page,
    seq: u64,
    tx: mpsc::UnboundedSender<AppEvent>,
    rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Log pane visible (F2)
    pub show_logs: bool,
    pub should_quit: bool,
    pub logger_state: TuiWidgetState,
}

impl App {
    /// Build the runtime on the list screen. Nothing is fetched until
    /// [`App::start`].
    pub fn new(api: Arc<dyn ProductApi>, config: Config) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            page: Page::new(Route::List, &config),
            api,
            config,
            seq: 0,
            tx,
            rx,
            show_logs: false,
            should_quit: false,
            logger_state: TuiWidgetState::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mount sequence of the current page
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn start(&mut self) {
        self.navigate(Route::List);
    }

    /// Replace the current page with a fresh one for `route`.
    pub fn navigate(&mut self, route: Route) {
        self.seq += 1;
        tracing::debug!(?route, seq = self.seq, "navigate");
        self.page = Page::new(route, &self.config);
        let cmds = self.page.mount();
        self.run(cmds);
    }

    /// Execute commands in order. A navigation ends the batch since the
    /// remaining commands belonged to the page being left.
    pub fn run(&mut self, cmds: Vec<Command>) {
        for cmd in cmds {
            match cmd {
                Command::Navigate(route) => {
                    self.navigate(route);
                    return;
                }
                Command::Quit => {
                    self.should_quit = true;
                    return;
                }
                cmd => self.spawn(cmd),
            }
        }
    }

    fn spawn(&self, cmd: Command) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let seq = self.seq;
        tokio::spawn(async move {
            if let Some(outcome) = execute(api.as_ref(), cmd).await {
                // receiver gone means the app is shutting down
                let _ = tx.send(AppEvent { seq, outcome });
            }
        });
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::F(2) {
            self.show_logs = !self.show_logs;
            return;
        }
        let cmds = self.page.handle_key(key, now);
        self.run(cmds);
    }

    pub fn on_event(&mut self, event: AppEvent) {
        if event.seq != self.seq {
            tracing::debug!(seq = event.seq, current = self.seq, "dropping stale event");
            return;
        }
        let cmds = self.page.apply(event.outcome);
        self.run(cmds);
    }

    pub fn tick(&mut self, now: Instant) {
        let cmds = self.page.tick(now);
        self.run(cmds);
    }

    /// Next completed command, without waiting
    pub fn try_next_event(&mut self) -> Option<AppEvent> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next completed command
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

/// Delete failures never mention the connection: the server's error when it
/// sent one, otherwise the generic delete message.
fn report_delete(err: ClientError) -> String {
    tracing::warn!(error = %err, "{DELETE_FAILED}");
    match err {
        ClientError::Api(Some(msg)) if !msg.is_empty() => msg,
        _ => DELETE_FAILED.to_string(),
    }
}

fn report(err: ClientError, fallback: &str) -> String {
    tracing::warn!(error = %err, "{fallback}");
    err.user_message(fallback)
}

/// Run one network command against the API.
pub async fn execute(api: &dyn ProductApi, cmd: Command) -> Option<Outcome> {
    let outcome = match cmd {
        Command::FetchList(query) => Outcome::ListLoaded(
            api.list_products(&query)
                .await
                .map_err(|e| report(e, "Failed to fetch products")),
        ),
        Command::FetchProduct(id) => Outcome::ProductLoaded(
            api.get_product(id)
                .await
                .map_err(|e| report(e, "Failed to fetch product")),
        ),
        Command::CreateProduct(payload) => Outcome::ProductCreated(
            api.create_product(&payload)
                .await
                .map_err(|e| report(e, "Failed to create product")),
        ),
        Command::UpdateProduct(id, payload) => Outcome::ProductUpdated(
            api.update_product(id, &payload)
                .await
                .map_err(|e| report(e, "Failed to update product")),
        ),
        Command::DeleteProduct(product_id) => Outcome::ProductDeleted {
            product_id,
            result: api
                .delete_product(product_id)
                .await
                .map_err(report_delete),
        },
        Command::ProbeImage { index, url } => Outcome::ImageProbed {
            index,
            status: api.probe_image(&url).await,
        },
        Command::Navigate(_) | Command::Quit => return None,
    };
    Some(outcome)
}
