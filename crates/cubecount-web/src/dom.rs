//! DOM-backed dialog and score adapters.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use cubecount_game::{Dialog, DialogAction, DialogAdapter, ScoreDisplay};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use crate::error::WebError;

/// Action waiting for the player to press the dialog's confirm button.
pub type PendingAction = Rc<RefCell<Option<DialogAction>>>;

/// Look up `#id` and cast it to `T`.
pub fn element_by_id<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T, WebError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WebError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| WebError::WrongElementType {
            id: id.to_string(),
            expected,
        })
}

pub fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

pub fn character_class(name: &str) -> String {
    format!("dialog-character character-{name}")
}

/// Modal dialog plus the victory overlay.
///
/// The confirm action is parked in `pending`; the confirm button listener
/// takes it and hands it back to the controller. Cancel clears it.
pub struct DomDialog {
    root: HtmlElement,
    title: Element,
    message: Element,
    character: HtmlElement,
    cancel: HtmlElement,
    victory: HtmlElement,
    victory_score: Element,
    pending: PendingAction,
    victory_timer: Rc<Cell<Option<i32>>>,
}

impl DomDialog {
    pub fn new(document: &Document) -> Result<Self, WebError> {
        Ok(Self {
            root: element_by_id(document, "dialog", "HTML element")?,
            title: element_by_id(document, "dialog-title", "element")?,
            message: element_by_id(document, "dialog-message", "element")?,
            character: element_by_id(document, "dialog-character", "HTML element")?,
            cancel: element_by_id(document, "dialog-cancel", "HTML element")?,
            victory: element_by_id(document, "victory", "HTML element")?,
            victory_score: element_by_id(document, "victory-score", "element")?,
            pending: Rc::new(RefCell::new(None)),
            victory_timer: Rc::new(Cell::new(None)),
        })
    }

    /// Shared handle the input layer uses to dispatch confirm actions.
    pub fn pending(&self) -> PendingAction {
        self.pending.clone()
    }

    /// Close the dialog and return the parked action, if any.
    pub fn close(root: &HtmlElement, pending: &PendingAction) -> Option<DialogAction> {
        root.set_hidden(true);
        pending.borrow_mut().take()
    }

    pub fn root(&self) -> &HtmlElement {
        &self.root
    }

    fn cancel_timer(&self) {
        if let Some(handle) = self.victory_timer.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
    }
}

impl DialogAdapter for DomDialog {
    fn show(&mut self, dialog: Dialog) {
        self.title.set_text_content(Some(&dialog.title));
        self.message.set_text_content(Some(&dialog.message));

        match dialog.character {
            Some(c) => {
                self.character.set_class_name(&character_class(c.name()));
                self.character.set_hidden(false);
            }
            None => self.character.set_hidden(true),
        }

        // Dialogs carrying an action must be confirmed.
        self.cancel.set_hidden(dialog.on_confirm.is_some());
        *self.pending.borrow_mut() = dialog.on_confirm;
        self.root.set_hidden(false);
    }

    fn show_victory(&mut self, score: u32, delay_ms: u32) {
        self.cancel_timer();
        self.victory_score.set_text_content(Some(&score.to_string()));

        let Some(window) = web_sys::window() else {
            self.victory.set_hidden(false);
            return;
        };

        let victory = self.victory.clone();
        let timer = self.victory_timer.clone();
        let callback = Closure::once_into_js(move || {
            timer.set(None);
            victory.set_hidden(false);
        });

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        ) {
            Ok(handle) => self.victory_timer.set(Some(handle)),
            Err(e) => {
                log::warn!("setTimeout failed ({e:?}), showing victory now");
                self.victory.set_hidden(false);
            }
        }
    }

    fn hide_victory(&mut self) {
        self.cancel_timer();
        self.victory.set_hidden(true);
        DomDialog::close(&self.root, &self.pending);
    }
}

/// The `Score: N` label.
pub struct ScoreLabel {
    element: Element,
}

impl ScoreLabel {
    pub fn new(document: &Document) -> Result<Self, WebError> {
        Ok(Self {
            element: element_by_id(document, "score", "element")?,
        })
    }
}

impl ScoreDisplay for ScoreLabel {
    fn update(&mut self, score: u32) {
        self.element.set_text_content(Some(&score_text(score)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubecount_game::Character;

    #[test]
    fn test_score_text() {
        assert_eq!(score_text(0), "Score: 0");
        assert_eq!(score_text(100), "Score: 100");
    }

    #[test]
    fn test_character_class() {
        assert_eq!(
            character_class(Character::Sad.name()),
            "dialog-character character-sad"
        );
    }
}
