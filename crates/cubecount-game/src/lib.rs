pub mod adapters;
pub mod answer;
pub mod controller;
pub mod error;
pub mod messages;
pub mod rotation;
pub mod state;

pub use adapters::{
    Character, Collaborators, Dialog, DialogAction, DialogAdapter, RenderAdapter, ScoreDisplay,
    SoundAdapter,
};
pub use controller::GameController;
pub use error::{GameError, InvalidAnswer};
pub use state::{AnswerOutcome, GameState, Phase};
