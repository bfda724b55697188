use cubecount_core::config::GameConfig;

use crate::error::GameError;

/// Where the game is in the question lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No question has been asked yet.
    #[default]
    Idle,
    /// A structure is on screen and the player may answer or retry.
    AwaitingAnswer,
    /// The last answer was correct; waiting for the success dialog to be confirmed.
    Advancing,
    /// Every question answered. Only `restart` leaves this phase.
    Victory,
}

/// Result of evaluating an accepted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct {
        /// True when this answer finished the final question.
        victory: bool,
    },
    Wrong {
        /// True on the first miss of the current question (the one that shows the hint).
        first_miss: bool,
    },
}

/// Score and per-question flags for one session.
///
/// All mutation goes through the transition methods below; the controller
/// drives them and talks to the collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    score: u32,
    questions_asked: u32,
    current_answer: u32,
    rotation_unlocked: bool,
    hint_shown: bool,
    phase: Phase,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn questions_asked(&self) -> u32 {
        self.questions_asked
    }

    /// Cube count of the structure currently on screen (0 before the first question).
    pub fn current_answer(&self) -> u32 {
        self.current_answer
    }

    pub fn rotation_unlocked(&self) -> bool {
        self.rotation_unlocked
    }

    pub fn hint_shown(&self) -> bool {
        self.hint_shown
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Start a new question whose structure has `answer` cubes.
    pub fn begin_question(&mut self, answer: u32) {
        self.questions_asked += 1;
        self.current_answer = answer;
        self.rotation_unlocked = false;
        self.hint_shown = false;
        self.phase = Phase::AwaitingAnswer;
    }

    /// Evaluate a parsed answer. Fails without touching state unless a
    /// question is awaiting an answer.
    pub fn evaluate(&mut self, value: u32, config: &GameConfig) -> Result<AnswerOutcome, GameError> {
        if self.phase != Phase::AwaitingAnswer {
            return Err(GameError::NotAcceptingAnswers(self.phase));
        }

        if value == self.current_answer {
            self.score += config.points_per_correct;
            let victory = self.questions_asked >= config.max_questions;
            self.phase = if victory {
                Phase::Victory
            } else {
                Phase::Advancing
            };
            Ok(AnswerOutcome::Correct { victory })
        } else {
            let first_miss = !self.hint_shown;
            self.rotation_unlocked = true;
            self.hint_shown = true;
            Ok(AnswerOutcome::Wrong { first_miss })
        }
    }

    /// Clear the session: score and question count back to zero.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asked(answer: u32) -> GameState {
        let mut state = GameState::new();
        state.begin_question(answer);
        state
    }

    #[test]
    fn test_fresh_state() {
        let state = GameState::new();
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.score(), 0);
        assert_eq!(state.questions_asked(), 0);
    }

    #[test]
    fn test_idle_rejects_answers() {
        let mut state = GameState::new();
        let err = state.evaluate(3, &GameConfig::default()).unwrap_err();
        assert_eq!(err, GameError::NotAcceptingAnswers(Phase::Idle));
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_correct_answer_scores_ten() {
        let mut state = asked(7);
        let outcome = state.evaluate(7, &GameConfig::default()).expect("accepted");
        assert_eq!(outcome, AnswerOutcome::Correct { victory: false });
        assert_eq!(state.score(), 10);
        assert!(!state.rotation_unlocked());
        assert_eq!(state.phase(), Phase::Advancing);
    }

    #[test]
    fn test_wrong_answer_unlocks_rotation() {
        let mut state = asked(7);
        let config = GameConfig::default();
        assert_eq!(
            state.evaluate(6, &config),
            Ok(AnswerOutcome::Wrong { first_miss: true })
        );
        assert!(state.rotation_unlocked());
        assert_eq!(state.score(), 0);
        assert_eq!(state.current_answer(), 7);
        assert_eq!(state.phase(), Phase::AwaitingAnswer);

        assert_eq!(
            state.evaluate(8, &config),
            Ok(AnswerOutcome::Wrong { first_miss: false })
        );
    }

    #[test]
    fn test_retry_after_miss_then_correct() {
        let mut state = asked(5);
        let config = GameConfig::default();
        state.evaluate(4, &config).expect("accepted");
        assert_eq!(
            state.evaluate(5, &config),
            Ok(AnswerOutcome::Correct { victory: false })
        );
        assert_eq!(state.score(), 10);
    }

    #[test]
    fn test_advancing_rejects_second_answer() {
        let mut state = asked(5);
        let config = GameConfig::default();
        state.evaluate(5, &config).expect("accepted");
        let before = state.clone();
        assert_eq!(
            state.evaluate(5, &config),
            Err(GameError::NotAcceptingAnswers(Phase::Advancing))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_new_question_resets_flags_keeps_score() {
        let mut state = asked(5);
        let config = GameConfig::default();
        state.evaluate(1, &config).expect("accepted");
        state.evaluate(5, &config).expect("accepted");
        state.begin_question(9);
        assert_eq!(state.score(), 10);
        assert_eq!(state.questions_asked(), 2);
        assert_eq!(state.current_answer(), 9);
        assert!(!state.rotation_unlocked());
        assert!(!state.hint_shown());
        assert_eq!(state.phase(), Phase::AwaitingAnswer);
    }

    #[test]
    fn test_victory_on_last_question() {
        let config = GameConfig {
            max_questions: 2,
            ..GameConfig::default()
        };
        let mut state = asked(4);
        state.evaluate(4, &config).expect("accepted");
        state.begin_question(6);
        assert_eq!(
            state.evaluate(6, &config),
            Ok(AnswerOutcome::Correct { victory: true })
        );
        assert_eq!(state.phase(), Phase::Victory);
        assert_eq!(state.score(), 20);
    }

    #[test]
    fn test_reset() {
        let mut state = asked(4);
        state.evaluate(4, &GameConfig::default()).expect("accepted");
        state.reset();
        assert_eq!(state, GameState::new());
    }
}
