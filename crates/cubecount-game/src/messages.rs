//! Dialog texts.

use crate::adapters::{Character, Dialog, DialogAction};

pub const ROTATE_HINT: &str =
    "Tip: drag the structure left or right to turn it and look for cubes hiding at the back.";

pub fn correct(count: u32) -> Dialog {
    Dialog {
        title: "Correct!".into(),
        message: format!("Well done, there are {count} cubes. Ready for the next one?"),
        on_confirm: Some(DialogAction::NextQuestion),
        character: Some(Character::Happy),
    }
}

/// The first miss on a question carries the rotation hint; later ones don't.
pub fn wrong(first_miss: bool) -> Dialog {
    let message = if first_miss {
        format!("That's not it. Count again!\n{ROTATE_HINT}")
    } else {
        "That's not it. Count again!".to_string()
    };
    Dialog {
        title: "Not quite".into(),
        message,
        on_confirm: None,
        character: Some(Character::Sad),
    }
}

pub fn invalid_input() -> Dialog {
    Dialog {
        title: "How many cubes?".into(),
        message: "Please enter a whole number greater than zero.".into(),
        on_confirm: None,
        character: Some(Character::Pass),
    }
}
