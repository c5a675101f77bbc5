//! Read-only product view

use catalog_client::{ImageStatus, Product};
use crossterm::event::{KeyCode, KeyEvent};

use crate::event::{Command, Loadable, Outcome, Route};

#[derive(Debug, Clone)]
pub struct DetailPage {
    pub product_id: i64,
    pub product: Loadable<Product>,
    /// Non-blank image URLs in order, first is the main image
    pub images: Vec<(String, ImageStatus)>,
}

impl DetailPage {
    pub fn new(product_id: i64) -> Self {
        Self {
            product_id,
            product: Loadable::Loading,
            images: Vec::new(),
        }
    }

    pub fn mount(&mut self) -> Vec<Command> {
        self.product = Loadable::Loading;
        self.images.clear();
        vec![Command::FetchProduct(self.product_id)]
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Command> {
        match key.code {
            KeyCode::Char('e') if self.product.loaded().is_some() => {
                vec![Command::Navigate(Route::Edit(self.product_id))]
            }
            KeyCode::Char('b') | KeyCode::Esc => vec![Command::Navigate(Route::List)],
            KeyCode::Char('r') if matches!(self.product, Loadable::Failed(_)) => self.mount(),
            KeyCode::Char('q') => vec![Command::Quit],
            _ => vec![],
        }
    }

    pub fn apply(&mut self, outcome: Outcome) -> Vec<Command> {
        match outcome {
            Outcome::ProductLoaded(Ok(product)) => {
                self.images = product
                    .image_links()
                    .map(|url| (url.to_string(), ImageStatus::Pending))
                    .collect();
                self.product = Loadable::Loaded(product);
                self.images
                    .iter()
                    .enumerate()
                    .map(|(index, (url, _))| Command::ProbeImage {
                        index,
                        url: url.clone(),
                    })
                    .collect()
            }
            Outcome::ProductLoaded(Err(msg)) => {
                self.product = Loadable::Failed(msg);
                vec![]
            }
            Outcome::ImageProbed { index, status } => {
                if let Some((_, slot)) = self.images.get_mut(index) {
                    *slot = status;
                }
                vec![]
            }
            other => {
                tracing::debug!(?other, "detail page ignoring outcome");
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn product() -> Product {
        serde_json::from_value(serde_json::json!({
            "product_id": 4,
            "product_name": "Sopladora",
            "link": ["https://cdn.example.com/a.png", "  ", "https://cdn.example.com/b.png"],
        }))
        .unwrap()
    }

    #[test]
    fn test_loaded_product_probes_each_image() {
        let mut page = DetailPage::new(4);
        assert_eq!(page.mount(), vec![Command::FetchProduct(4)]);

        let cmds = page.apply(Outcome::ProductLoaded(Ok(product())));
        assert_eq!(
            cmds,
            vec![
                Command::ProbeImage {
                    index: 0,
                    url: "https://cdn.example.com/a.png".into()
                },
                Command::ProbeImage {
                    index: 1,
                    url: "https://cdn.example.com/b.png".into()
                },
            ]
        );
        assert_eq!(page.images[1].1, ImageStatus::Pending);
    }

    #[test]
    fn test_failed_image_keeps_page_loaded() {
        let mut page = DetailPage::new(4);
        page.mount();
        page.apply(Outcome::ProductLoaded(Ok(product())));
        page.apply(Outcome::ImageProbed {
            index: 1,
            status: ImageStatus::Placeholder,
        });

        assert!(page.product.loaded().is_some());
        assert_eq!(page.images[0].1, ImageStatus::Pending);
        assert_eq!(page.images[1].1, ImageStatus::Placeholder);
    }

    #[test]
    fn test_retry_only_after_failure() {
        let mut page = DetailPage::new(9);
        page.mount();
        assert!(page.handle_key(key(KeyCode::Char('r'))).is_empty());

        page.apply(Outcome::ProductLoaded(Err("Product not found".into())));
        assert!(page.handle_key(key(KeyCode::Char('e'))).is_empty());
        assert_eq!(
            page.handle_key(key(KeyCode::Char('r'))),
            vec![Command::FetchProduct(9)]
        );
        assert_eq!(
            page.handle_key(key(KeyCode::Esc)),
            vec![Command::Navigate(Route::List)]
        );
    }
}
