use cubecount_core::config::GameConfig;
use cubecount_core::types::SoundKind;
use cubecount_world::{RandomSource, Structure, StructureGenerator};

use crate::adapters::{Collaborators, DialogAction};
use crate::answer::parse_answer;
use crate::error::GameError;
use crate::messages;
use crate::rotation::{rotation_delta, DragTracker};
use crate::state::{AnswerOutcome, GameState, Phase};

/// Owns the session: game state, the live structure, the random source, and
/// the collaborators. Every input event maps to one method here.
pub struct GameController {
    config: GameConfig,
    state: GameState,
    generator: StructureGenerator,
    rng: Box<dyn RandomSource>,
    structure: Structure,
    drag: DragTracker,
    /// Orientation of the displayed structure, in radians.
    angle: f32,
    adapters: Collaborators,
}

impl GameController {
    /// Create a controller. Nothing is shown until `restart` is called.
    pub fn new(config: GameConfig, rng: Box<dyn RandomSource>, adapters: Collaborators) -> Self {
        let generator = StructureGenerator::new(config.generator.clone());
        let angle = config.start_angle();
        Self {
            config,
            state: GameState::new(),
            generator,
            rng,
            structure: Structure::default(),
            drag: DragTracker::new(),
            angle,
            adapters,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    /// Current orientation in radians.
    pub fn rotation(&self) -> f32 {
        self.angle
    }

    /// Replace the structure with a freshly generated one and display it at
    /// the start angle. Ignored after victory (use `restart`).
    pub fn new_question(&mut self) {
        if self.state.phase() == Phase::Victory {
            log::debug!("new_question ignored after victory");
            return;
        }

        self.structure = self.generator.generate(&mut *self.rng);
        self.state.begin_question(self.structure.len() as u32);
        self.angle = self.config.start_angle();

        log::info!(
            "Question {}/{}: {} cubes",
            self.state.questions_asked(),
            self.config.max_questions,
            self.state.current_answer()
        );

        self.adapters.render.display(&self.structure, self.angle);
        self.adapters.score.update(self.state.score());
    }

    /// Evaluate the text the player entered.
    ///
    /// Invalid input prompts the player and leaves every state field alone.
    /// Outside a question nothing is parsed or shown, so a dialog waiting
    /// for confirmation keeps its action.
    pub fn submit_answer(&mut self, input: &str) -> Result<AnswerOutcome, GameError> {
        let phase = self.state.phase();
        if phase != Phase::AwaitingAnswer {
            log::debug!("Answer ignored in {phase:?}");
            return Err(GameError::NotAcceptingAnswers(phase));
        }

        let value = match parse_answer(input) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("Rejected answer: {e}");
                self.adapters.dialog.show(messages::invalid_input());
                return Err(e.into());
            }
        };

        let outcome = self.state.evaluate(value, &self.config)?;
        log::debug!("Answer {value}: {outcome:?}");

        match outcome {
            AnswerOutcome::Correct { victory } => {
                self.adapters.sound.play(SoundKind::Correct);
                self.adapters.score.update(self.state.score());
                if victory {
                    log::info!("Victory with score {}", self.state.score());
                    let delay = self.config.victory_delay_ms;
                    self.adapters.sound.play_after(SoundKind::Victory, delay);
                    self.adapters.dialog.show_victory(self.state.score(), delay);
                } else {
                    self.adapters
                        .dialog
                        .show(messages::correct(self.state.current_answer()));
                }
            }
            AnswerOutcome::Wrong { first_miss } => {
                self.adapters.sound.play(SoundKind::Wrong);
                self.adapters.dialog.show(messages::wrong(first_miss));
            }
        }

        Ok(outcome)
    }

    /// Run the action attached to a confirmed dialog.
    pub fn confirm(&mut self, action: DialogAction) {
        match action {
            DialogAction::NextQuestion => {
                if self.state.phase() == Phase::Advancing {
                    self.new_question();
                } else {
                    log::debug!("Stale NextQuestion confirm in {:?}", self.state.phase());
                }
            }
            DialogAction::Restart => self.restart(),
        }
    }

    /// Start a new session: zero score and question count, then ask the first question.
    pub fn restart(&mut self) {
        log::info!("Starting new game");
        self.state.reset();
        self.drag.end();
        self.adapters.dialog.hide_victory();
        self.new_question();
    }

    pub fn drag_start(&mut self, x: f32) {
        self.drag.start(x);
    }

    /// Feed a horizontal pointer position. Turns the structure only once
    /// rotation is unlocked for the current question.
    pub fn drag_move(&mut self, x: f32) {
        let Some(dx) = self.drag.move_to(x) else {
            return;
        };
        if !self.state.rotation_unlocked() || dx == 0.0 {
            return;
        }
        self.angle += rotation_delta(dx, self.config.rotation_sensitivity);
        self.adapters.render.set_rotation(self.angle);
    }

    pub fn drag_end(&mut self) {
        self.drag.end();
    }

    pub fn resize(&mut self) {
        self.adapters.render.resize();
    }
}
