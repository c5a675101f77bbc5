//! Key handling for the product form, shared by create and edit

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::form::{Field, FieldKind, FormMode, ProductForm};

/// Submission state of the form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved(String),
    Failed(String),
}

/// What the owning page should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    None,
    /// Form validated; send it
    Submit,
    Back,
}

#[derive(Debug, Clone)]
pub struct FormEditor {
    pub form: ProductForm,
    pub mode: FormMode,
    pub focus: usize,
    /// Inline text editor for the focused field, if open
    pub editing: Option<Input>,
    pub status: SaveStatus,
}

impl FormEditor {
    pub fn new(mode: FormMode) -> Self {
        Self::with_form(ProductForm::default(), mode)
    }

    pub fn with_form(form: ProductForm, mode: FormMode) -> Self {
        Self {
            form,
            mode,
            focus: 0,
            editing: None,
            status: SaveStatus::Idle,
        }
    }

    pub fn fields(&self) -> Vec<Field> {
        self.form.fields(self.mode)
    }

    pub fn focused(&self) -> Field {
        let fields = self.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn is_saving(&self) -> bool {
        self.status == SaveStatus::Saving
    }

    fn move_focus(&mut self, delta: isize) {
        let len = self.fields().len() as isize;
        self.focus = (self.focus as isize + delta).rem_euclid(len) as usize;
    }

    fn commit_edit(&mut self) {
        if let Some(input) = self.editing.take() {
            let field = self.focused();
            self.form.set_text(field, input.value());
        }
    }

    /// Validate and mark the form as saving. Leaves the form untouched and
    /// records the failure when a required field is blank.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_saving() {
            return false;
        }
        match self.form.validate(self.mode) {
            Ok(()) => {
                self.status = SaveStatus::Saving;
                true
            }
            Err(msg) => {
                tracing::debug!(missing = ?self.form.missing_required(self.mode), "form incomplete");
                self.status = SaveStatus::Failed(msg.to_string());
                false
            }
        }
    }

    fn submit(&mut self) -> EditorAction {
        if self.begin_submit() {
            EditorAction::Submit
        } else {
            EditorAction::None
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EditorAction {
        let ctrl_s =
            key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s');

        if let Some(input) = self.editing.as_mut() {
            match key.code {
                KeyCode::Enter => self.commit_edit(),
                KeyCode::Esc => self.editing = None,
                KeyCode::Tab => {
                    self.commit_edit();
                    self.move_focus(1);
                }
                _ if ctrl_s => {
                    self.commit_edit();
                    return self.submit();
                }
                _ => {
                    input.handle_event(&Event::Key(key));
                }
            }
            return EditorAction::None;
        }

        if ctrl_s {
            return self.submit();
        }

        let field = self.focused();
        match key.code {
            KeyCode::Up | KeyCode::BackTab => self.move_focus(-1),
            KeyCode::Down | KeyCode::Tab => self.move_focus(1),
            KeyCode::Enter => match field.kind() {
                FieldKind::Text => {
                    let value = self.form.text(field).unwrap_or_default().to_string();
                    self.editing = Some(Input::new(value));
                }
                FieldKind::Choice(_) => self.form.cycle(field, 1),
                FieldKind::Flag => self.form.toggle(field),
            },
            KeyCode::Left | KeyCode::Right => {
                let delta = if key.code == KeyCode::Left { -1 } else { 1 };
                match field.kind() {
                    FieldKind::Choice(_) => self.form.cycle(field, delta),
                    FieldKind::Flag => self.form.toggle(field),
                    FieldKind::Text => {}
                }
            }
            KeyCode::Char(' ') if field.kind() == FieldKind::Flag => self.form.toggle(field),
            KeyCode::Char('+') => {
                self.form.add_link();
                self.focus = self.fields().len() - 1;
            }
            KeyCode::Char('-') => {
                if let Field::Link(i) = field
                    && self.form.remove_link(i)
                {
                    self.focus = self.focus.min(self.fields().len() - 1);
                }
            }
            KeyCode::Char('s') => return self.submit(),
            KeyCode::Esc => return EditorAction::Back,
            _ => {}
        }
        EditorAction::None
    }
}
