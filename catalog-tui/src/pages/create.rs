//! New product form

use crossterm::event::{KeyCode, KeyEvent};

use crate::event::{Command, Outcome, Route};
use crate::form::{FormMode, ProductForm};
use crate::pages::editor::{EditorAction, FormEditor, SaveStatus};

pub const CREATED_MESSAGE: &str = "Product created successfully!";

#[derive(Debug, Clone)]
pub struct CreatePage {
    pub editor: FormEditor,
    /// `product_id` returned by the last successful create
    pub created_id: Option<i64>,
}

impl Default for CreatePage {
    fn default() -> Self {
        Self::new()
    }
}

impl CreatePage {
    pub fn new() -> Self {
        Self {
            editor: FormEditor::new(FormMode::Create),
            created_id: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Command> {
        if !self.editor.is_editing()
            && key.code == KeyCode::Char('v')
            && let Some(id) = self.created_id
        {
            return vec![Command::Navigate(Route::Detail(id))];
        }

        match self.editor.handle_key(key) {
            EditorAction::Submit => {
                self.created_id = None;
                vec![Command::CreateProduct(self.editor.form.to_create())]
            }
            EditorAction::Back => vec![Command::Navigate(Route::List)],
            EditorAction::None => vec![],
        }
    }

    pub fn apply(&mut self, outcome: Outcome) -> Vec<Command> {
        match outcome {
            Outcome::ProductCreated(Ok(product)) => {
                tracing::info!(product_id = product.product_id, "product created");
                self.editor.form = ProductForm::default();
                self.editor.focus = 0;
                self.editor.status = SaveStatus::Saved(CREATED_MESSAGE.to_string());
                self.created_id = Some(product.product_id);
            }
            Outcome::ProductCreated(Err(msg)) => self.editor.status = SaveStatus::Failed(msg),
            other => tracing::debug!(?other, "create page ignoring outcome"),
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_client::Product;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn filled_page() -> CreatePage {
        let mut page = CreatePage::new();
        page.editor.form = ProductForm {
            product_code: "MS-250".into(),
            product_name: "Motosierra".into(),
            category_name: "Motosierras".into(),
            brand_name: "ECHO".into(),
            brand_logo: "/images/brands/echo.png".into(),
            description: "Poda".into(),
            ..Default::default()
        };
        page
    }

    #[test]
    fn test_blank_submit_issues_no_command() {
        let mut page = CreatePage::new();
        assert!(page.handle_key(key(KeyCode::Char('s'))).is_empty());
        assert!(matches!(page.editor.status, SaveStatus::Failed(_)));
    }

    #[test]
    fn test_success_resets_form_and_links_new_product() {
        let mut page = filled_page();
        let cmds = page.handle_key(key(KeyCode::Char('s')));
        assert!(matches!(cmds.as_slice(), [Command::CreateProduct(p)] if p.product_code == "MS-250"));

        let created: Product =
            serde_json::from_value(serde_json::json!({"product_id": 42})).unwrap();
        page.apply(Outcome::ProductCreated(Ok(created)));

        assert_eq!(page.editor.form, ProductForm::default());
        assert_eq!(
            page.editor.status,
            SaveStatus::Saved(CREATED_MESSAGE.to_string())
        );
        assert_eq!(
            page.handle_key(key(KeyCode::Char('v'))),
            vec![Command::Navigate(Route::Detail(42))]
        );
    }

    #[test]
    fn test_new_submit_drops_previous_link() {
        let mut page = filled_page();
        page.handle_key(key(KeyCode::Char('s')));
        let created: Product =
            serde_json::from_value(serde_json::json!({"product_id": 42})).unwrap();
        page.apply(Outcome::ProductCreated(Ok(created)));
        assert_eq!(page.created_id, Some(42));

        page.editor.form = filled_page().editor.form;
        page.handle_key(key(KeyCode::Char('s')));
        assert_eq!(page.created_id, None);

        page.apply(Outcome::ProductCreated(Err("Failed to create product".into())));
        assert!(page.handle_key(key(KeyCode::Char('v'))).is_empty());
    }

    #[test]
    fn test_failure_keeps_entered_data() {
        let mut page = filled_page();
        page.handle_key(key(KeyCode::Char('s')));
        page.apply(Outcome::ProductCreated(Err("Failed to create product".into())));

        assert_eq!(page.editor.form.product_code, "MS-250");
        assert_eq!(
            page.editor.status,
            SaveStatus::Failed("Failed to create product".into())
        );
        assert!(page.handle_key(key(KeyCode::Char('v'))).is_empty());
    }
}
