use cubecount_core::config::GameConfig;
use cubecount_game::{DialogAction, GameController, GameError};
use web_sys::HtmlInputElement;

/// Tunables shipped with the page.
const GAME_RON: &str = include_str!("../assets/game.ron");

pub fn load_config() -> GameConfig {
    GameConfig::from_ron_or_default(GAME_RON)
}

/// Main application struct. Owns the controller and the answer field; input
/// listeners borrow it for the duration of one event.
pub struct Application {
    controller: GameController,
    answer: HtmlInputElement,
}

impl Application {
    pub fn new(controller: GameController, answer: HtmlInputElement) -> Self {
        Self { controller, answer }
    }

    /// Start the first game.
    pub fn start(&mut self) {
        self.controller.restart();
        let _ = self.answer.focus();
    }

    /// Submit the answer field's contents.
    pub fn submit(&mut self) {
        let text = self.answer.value();
        match self.controller.submit_answer(&text) {
            Ok(_) => self.answer.set_value(""),
            Err(GameError::InvalidInput(_)) => self.answer.select(),
            Err(e) => log::debug!("Submit ignored: {e}"),
        }
    }

    pub fn confirm(&mut self, action: DialogAction) {
        self.controller.confirm(action);
        let _ = self.answer.focus();
    }

    /// The victory screen's play-again button.
    pub fn restart(&mut self) {
        self.answer.set_value("");
        self.confirm(DialogAction::Restart);
    }

    pub fn drag_start(&mut self, x: f32) {
        self.controller.drag_start(x);
    }

    pub fn drag_move(&mut self, x: f32) {
        self.controller.drag_move(x);
    }

    pub fn drag_end(&mut self) {
        self.controller.drag_end();
    }

    pub fn resize(&mut self) {
        self.controller.resize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = GameConfig::from_ron(GAME_RON).expect("bundled config");
        assert_eq!(config, GameConfig::default());
    }
}
