//! Edit form for an existing product

use catalog_client::Product;
use crossterm::event::{KeyCode, KeyEvent};

use crate::event::{Command, Loadable, Outcome, Route};
use crate::form::{FormMode, ProductForm};
use crate::pages::editor::{EditorAction, FormEditor, SaveStatus};

pub const UPDATED_MESSAGE: &str = "Product updated successfully!";
pub const NOT_FOUND_TITLE: &str = "Product not found";

#[derive(Debug, Clone)]
pub struct EditPage {
    pub product_id: i64,
    /// Last fetched copy, used for the read-only fields
    pub product: Loadable<Product>,
    pub editor: FormEditor,
}

impl EditPage {
    pub fn new(product_id: i64) -> Self {
        Self {
            product_id,
            product: Loadable::Loading,
            editor: FormEditor::new(FormMode::Edit),
        }
    }

    pub fn mount(&mut self) -> Vec<Command> {
        self.product = Loadable::Loading;
        vec![Command::FetchProduct(self.product_id)]
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Command> {
        if self.product.loaded().is_none() {
            return match key.code {
                KeyCode::Char('r') if matches!(self.product, Loadable::Failed(_)) => self.mount(),
                KeyCode::Char('b') | KeyCode::Esc => vec![Command::Navigate(Route::List)],
                KeyCode::Char('q') => vec![Command::Quit],
                _ => vec![],
            };
        }

        match self.editor.handle_key(key) {
            EditorAction::Submit => vec![Command::UpdateProduct(
                self.product_id,
                self.editor.form.to_update(),
            )],
            EditorAction::Back => vec![Command::Navigate(Route::Detail(self.product_id))],
            EditorAction::None => vec![],
        }
    }

    pub fn apply(&mut self, outcome: Outcome) -> Vec<Command> {
        match outcome {
            Outcome::ProductLoaded(Ok(product)) => {
                self.editor.form = ProductForm::from_product(&product);
                self.editor.editing = None;
                self.editor.focus = self.editor.focus.min(self.editor.fields().len() - 1);
                self.product = Loadable::Loaded(product);
            }
            Outcome::ProductLoaded(Err(msg)) => {
                if self.product.loaded().is_some() {
                    // refresh after save failed; keep the form on screen
                    self.editor.status = SaveStatus::Failed(msg);
                } else {
                    self.product = Loadable::Failed(msg);
                }
            }
            Outcome::ProductUpdated(Ok(product)) => {
                tracing::info!(product_id = product.product_id, "product updated");
                self.editor.status = SaveStatus::Saved(UPDATED_MESSAGE.to_string());
                return vec![Command::FetchProduct(self.product_id)];
            }
            Outcome::ProductUpdated(Err(msg)) => self.editor.status = SaveStatus::Failed(msg),
            other => tracing::debug!(?other, "edit page ignoring outcome"),
        }
        vec![]
    }
}
