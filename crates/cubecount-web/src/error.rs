use thiserror::Error;

/// Start-up failures. Any of these means the page does not match what the
/// game expects, so they are reported to the user and the game does not start.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("no global window or document")]
    NoDocument,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    #[error("2D canvas context unavailable")]
    NoCanvasContext,

    #[error("failed to register {0} listener")]
    Listener(&'static str),
}
