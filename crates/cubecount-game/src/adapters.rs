//! Interfaces to the presentation layer.
//!
//! The controller owns one of each collaborator and calls them
//! synchronously. Implementations live in the web crate; tests use
//! recording doubles.

use cubecount_core::types::SoundKind;
use cubecount_world::Structure;

/// Displays structures and their orientation.
pub trait RenderAdapter {
    /// Replace whatever is displayed with `structure` at `initial_angle`
    /// radians. The adapter releases resources held for the previous one.
    fn display(&mut self, structure: &Structure, initial_angle: f32);

    /// Update the orientation of the displayed structure.
    fn set_rotation(&mut self, angle: f32);

    /// The viewport changed size.
    fn resize(&mut self);
}

/// Best-effort sound playback. Implementations swallow their own failures.
pub trait SoundAdapter {
    fn play(&mut self, kind: SoundKind);

    /// Play `kind` after `delay_ms` milliseconds.
    fn play_after(&mut self, kind: SoundKind, delay_ms: u32);
}

/// Character artwork shown next to a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Character {
    Happy,
    Sad,
    Pass,
}

impl Character {
    pub fn name(self) -> &'static str {
        match self {
            Character::Happy => "happy",
            Character::Sad => "sad",
            Character::Pass => "pass",
        }
    }
}

/// Transition to run when the player confirms a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    NextQuestion,
    Restart,
}

/// A modal message. `on_confirm` is handed back to the controller only when
/// the player explicitly confirms; cancelling drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
    pub on_confirm: Option<DialogAction>,
    pub character: Option<Character>,
}

pub trait DialogAdapter {
    fn show(&mut self, dialog: Dialog);

    /// Present the victory screen after `delay_ms` milliseconds.
    fn show_victory(&mut self, score: u32, delay_ms: u32);

    /// Remove the victory screen (and any pending one).
    fn hide_victory(&mut self);
}

pub trait ScoreDisplay {
    fn update(&mut self, score: u32);
}

/// The full set of collaborators a controller drives.
pub struct Collaborators {
    pub render: Box<dyn RenderAdapter>,
    pub sound: Box<dyn SoundAdapter>,
    pub dialog: Box<dyn DialogAdapter>,
    pub score: Box<dyn ScoreDisplay>,
}
