//! Product list with search, active-only filter and delete

use std::time::{Duration, Instant};

use catalog_client::{Product, ProductQuery};
use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::config::Config;
use crate::debounce::Debouncer;
use crate::event::{Command, Loadable, Outcome, Route};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this product?";
pub const EMPTY_SEARCH: &str = "No products found matching your search.";
pub const EMPTY_LIST: &str = "No products found.";

#[derive(Debug, Clone)]
pub struct ListPage {
    pub search: Input,
    /// Search box has focus
    pub searching: bool,
    pub active_only: bool,
    pub products: Loadable<Vec<Product>>,
    pub selected: usize,
    /// Product awaiting delete confirmation
    pub confirm_delete: Option<i64>,
    /// One-line notice (failed deletes)
    pub notice: Option<String>,
    limit: u32,
    debounce: Debouncer,
    last_query: ProductQuery,
}

impl ListPage {
    pub fn new(config: &Config) -> Self {
        Self::with_options(config.list_limit, config.search_debounce)
    }

    pub fn with_options(limit: u32, debounce: Duration) -> Self {
        Self {
            search: Input::default(),
            searching: false,
            active_only: false,
            products: Loadable::Loading,
            selected: 0,
            confirm_delete: None,
            notice: None,
            limit,
            debounce: Debouncer::new(debounce),
            last_query: ProductQuery::default(),
        }
    }

    pub fn query(&self) -> ProductQuery {
        ProductQuery::new(self.search.value(), self.active_only, self.limit)
    }

    fn fetch(&mut self, query: ProductQuery) -> Vec<Command> {
        self.products = Loadable::Loading;
        self.last_query = query.clone();
        vec![Command::FetchList(query)]
    }

    /// First load happens straight away, without waiting for the debounce.
    pub fn mount(&mut self) -> Vec<Command> {
        self.fetch(self.query())
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.products.loaded().and_then(|p| p.get(self.selected))
    }

    /// Message for an empty result, decided by the query that produced it
    pub fn empty_message(&self) -> &'static str {
        if self.last_query.search.is_some() {
            EMPTY_SEARCH
        } else {
            EMPTY_LIST
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Vec<Command> {
        if let Some(product_id) = self.confirm_delete {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.confirm_delete = None;
                    self.notice = None;
                    return vec![Command::DeleteProduct(product_id)];
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.confirm_delete = None;
                }
                _ => {}
            }
            return vec![];
        }

        if self.searching {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => self.searching = false,
                _ => {
                    let changed = self
                        .search
                        .handle_event(&Event::Key(key))
                        .is_some_and(|c| c.value);
                    if changed {
                        self.debounce.touch(now);
                    }
                }
            }
            return vec![];
        }

        let count = self.products.loaded().map_or(0, Vec::len);
        match key.code {
            KeyCode::Char('/') => self.searching = true,
            KeyCode::Char('a') => {
                self.active_only = !self.active_only;
                self.debounce.touch(now);
            }
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < count {
                    self.selected += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char('v') => {
                if let Some(p) = self.selected_product() {
                    return vec![Command::Navigate(Route::Detail(p.product_id))];
                }
            }
            KeyCode::Char('e') => {
                if let Some(p) = self.selected_product() {
                    return vec![Command::Navigate(Route::Edit(p.product_id))];
                }
            }
            KeyCode::Char('d') => {
                self.confirm_delete = self.selected_product().map(|p| p.product_id);
            }
            KeyCode::Char('n') => return vec![Command::Navigate(Route::Create)],
            KeyCode::Char('r') => {
                self.debounce.cancel();
                return self.fetch(self.last_query.clone());
            }
            KeyCode::Char('q') => return vec![Command::Quit],
            _ => {}
        }
        vec![]
    }

    pub fn tick(&mut self, now: Instant) -> Vec<Command> {
        if self.debounce.fire(now) {
            self.selected = 0;
            return self.fetch(self.query());
        }
        vec![]
    }

    pub fn apply(&mut self, outcome: Outcome) -> Vec<Command> {
        match outcome {
            Outcome::ListLoaded(result) => {
                self.products = result.map(|list| list.products).into();
                self.clamp_selection();
            }
            Outcome::ProductDeleted { product_id, result } => match result {
                Ok(()) => {
                    if let Loadable::Loaded(products) = &mut self.products {
                        products.retain(|p| p.product_id != product_id);
                    }
                    self.clamp_selection();
                }
                Err(msg) => self.notice = Some(msg),
            },
            other => tracing::debug!(?other, "list page ignoring outcome"),
        }
        vec![]
    }

    fn clamp_selection(&mut self) {
        let count = self.products.loaded().map_or(0, Vec::len);
        self.selected = self.selected.min(count.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_client::ProductList;
    use crossterm::event::KeyModifiers;

    const DELAY: Duration = Duration::from_millis(300);

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn product(id: i64) -> Product {
        serde_json::from_value(serde_json::json!({
            "product_id": id,
            "product_name": format!("P{id}"),
        }))
        .unwrap()
    }

    fn loaded(ids: &[i64]) -> ListPage {
        let mut page = ListPage::with_options(100, DELAY);
        page.mount();
        let products: Vec<Product> = ids.iter().copied().map(product).collect();
        page.apply(Outcome::ListLoaded(Ok(ProductList {
            count: products.len(),
            products,
        })));
        page
    }

    fn ids(page: &ListPage) -> Vec<i64> {
        page.products
            .loaded()
            .unwrap()
            .iter()
            .map(|p| p.product_id)
            .collect()
    }

    #[test]
    fn test_mount_fetches_immediately() {
        let mut page = ListPage::with_options(100, DELAY);
        let cmds = page.mount();
        assert_eq!(cmds, vec![Command::FetchList(ProductQuery::new("", false, 100))]);
        assert!(page.products.is_loading());
    }

    #[test]
    fn test_typing_is_debounced() {
        let t0 = Instant::now();
        let mut page = loaded(&[1]);

        page.handle_key(key('/'), t0);
        for (i, c) in "abc".chars().enumerate() {
            let at = t0 + Duration::from_millis(100 * i as u64);
            assert!(page.handle_key(key(c), at).is_empty());
            assert!(page.tick(at).is_empty());
        }

        assert!(page.tick(t0 + Duration::from_millis(499)).is_empty());
        let cmds = page.tick(t0 + Duration::from_millis(500));
        assert_eq!(cmds, vec![Command::FetchList(ProductQuery::new("abc", false, 100))]);
        assert!(page.tick(t0 + Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn test_active_toggle_is_debounced() {
        let t0 = Instant::now();
        let mut page = loaded(&[1]);
        assert!(page.handle_key(key('a'), t0).is_empty());
        let cmds = page.tick(t0 + DELAY);
        assert_eq!(cmds, vec![Command::FetchList(ProductQuery::new("", true, 100))]);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let now = Instant::now();
        let mut page = loaded(&[1, 2, 3]);
        page.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE), now);

        assert!(page.handle_key(key('d'), now).is_empty());
        assert_eq!(page.confirm_delete, Some(2));
        assert!(page.handle_key(key('n'), now).is_empty());
        assert_eq!(page.confirm_delete, None);

        page.handle_key(key('d'), now);
        assert_eq!(page.handle_key(key('y'), now), vec![Command::DeleteProduct(2)]);
    }

    #[test]
    fn test_delete_removes_exactly_that_row() {
        let mut page = loaded(&[1, 2, 3]);
        page.apply(Outcome::ProductDeleted {
            product_id: 2,
            result: Ok(()),
        });
        assert_eq!(ids(&page), vec![1, 3]);
        assert!(page.notice.is_none());
    }

    #[test]
    fn test_failed_delete_keeps_rows() {
        let mut page = loaded(&[1, 2]);
        page.apply(Outcome::ProductDeleted {
            product_id: 1,
            result: Err("Failed to delete product".into()),
        });
        assert_eq!(ids(&page), vec![1, 2]);
        assert_eq!(page.notice.as_deref(), Some("Failed to delete product"));
    }

    #[test]
    fn test_retry_reruns_last_query() {
        let now = Instant::now();
        let mut page = ListPage::with_options(100, DELAY);
        page.mount();
        page.apply(Outcome::ListLoaded(Err("Failed to connect to the server".into())));
        assert_eq!(
            page.products,
            Loadable::Failed("Failed to connect to the server".into())
        );

        let cmds = page.handle_key(key('r'), now);
        assert_eq!(cmds, vec![Command::FetchList(ProductQuery::new("", false, 100))]);
        assert!(page.products.is_loading());
    }

    #[test]
    fn test_empty_message_follows_fetched_query() {
        let t0 = Instant::now();
        let mut page = loaded(&[]);
        assert_eq!(page.empty_message(), EMPTY_LIST);

        // typing alone does not change the message
        page.handle_key(key('/'), t0);
        page.handle_key(key('x'), t0);
        assert_eq!(page.empty_message(), EMPTY_LIST);

        page.tick(t0 + DELAY);
        page.apply(Outcome::ListLoaded(Ok(ProductList {
            products: vec![],
            count: 0,
        })));
        assert_eq!(page.empty_message(), EMPTY_SEARCH);
    }

    #[test]
    fn test_whitespace_search_counts_as_search() {
        let t0 = Instant::now();
        let mut page = loaded(&[]);
        page.handle_key(key('/'), t0);
        page.handle_key(key(' '), t0);
        page.tick(t0 + DELAY);
        assert_eq!(page.empty_message(), EMPTY_SEARCH);
    }

    #[test]
    fn test_navigation_keys() {
        let now = Instant::now();
        let mut page = loaded(&[7]);
        assert_eq!(page.handle_key(key('v'), now), vec![Command::Navigate(Route::Detail(7))]);
        assert_eq!(page.handle_key(key('e'), now), vec![Command::Navigate(Route::Edit(7))]);
        assert_eq!(page.handle_key(key('n'), now), vec![Command::Navigate(Route::Create)]);
        assert_eq!(page.handle_key(key('q'), now), vec![Command::Quit]);
    }
}
