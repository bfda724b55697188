mod app;
mod camera;
mod dom;
mod error;
mod input;
mod render;
mod scene;
mod sound;

use std::cell::RefCell;
use std::rc::Rc;

use cubecount_audio::AudioSystem;
use cubecount_game::{Collaborators, GameController};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlElement, HtmlInputElement};

use crate::dom::{element_by_id, DomDialog, ScoreLabel};
use crate::error::WebError;

/// WASM entry point. Sets the panic hook and initializes logging.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("logger init failed");
    log::info!("Cube Count starting...");

    if let Err(e) = run() {
        show_error_to_user(&format!("{e}"));
    }
}

/// Look up the page elements, wire the adapters and listeners, start a game.
fn run() -> Result<(), WebError> {
    let window = web_sys::window().ok_or(WebError::NoDocument)?;
    let document = window.document().ok_or(WebError::NoDocument)?;

    let canvas: HtmlCanvasElement = element_by_id(&document, "cube-canvas", "canvas")?;
    let answer: HtmlInputElement = element_by_id(&document, "answer-input", "input")?;
    let submit: HtmlElement = element_by_id(&document, "submit-button", "HTML element")?;
    let dialog_confirm: HtmlElement = element_by_id(&document, "dialog-confirm", "HTML element")?;
    let dialog_cancel: HtmlElement = element_by_id(&document, "dialog-cancel", "HTML element")?;
    let restart: HtmlElement = element_by_id(&document, "restart-button", "HTML element")?;
    let sound_toggle: HtmlInputElement = element_by_id(&document, "sound-toggle", "input")?;
    let volume: HtmlInputElement = element_by_id(&document, "volume", "input")?;

    let dialog = DomDialog::new(&document)?;
    let dialog_root = dialog.root().clone();
    let pending = dialog.pending();

    let audio: sound::SharedAudio = Rc::new(RefCell::new(AudioSystem::new()));
    sound_toggle.set_checked(audio.borrow().is_enabled());
    volume.set_value(&sound::volume_text(&audio.borrow()));

    let adapters = Collaborators {
        render: Box::new(render::CanvasRenderer::new(canvas.clone())?),
        sound: Box::new(sound::WebSound::new(audio.clone())),
        dialog: Box::new(dialog),
        score: Box::new(ScoreLabel::new(&document)?),
    };

    let config = app::load_config();
    let seed = session_seed();
    log::info!("Session seed {seed:#018x}");
    let rng = Box::new(cubecount_world::seeded(seed));
    let controller = GameController::new(config, rng, adapters);

    let app = Rc::new(RefCell::new(app::Application::new(controller, answer.clone())));

    let targets = input::Targets {
        window: &window,
        canvas: &canvas,
        answer: &answer,
        submit: &submit,
        dialog_root: &dialog_root,
        dialog_confirm: &dialog_confirm,
        dialog_cancel: &dialog_cancel,
        restart: &restart,
        sound_toggle: &sound_toggle,
        volume: &volume,
    };
    input::register_listeners(&targets, app.clone(), pending, audio)?;

    app.borrow_mut().start();
    Ok(())
}

/// A fresh seed per page load from the clock and `Math.random`.
fn session_seed() -> u64 {
    let now = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    now.rotate_left(21) ^ noise
}

/// Show a user-visible error, not just a console line.
fn show_error_to_user(msg: &str) {
    log::error!("{msg}");
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&format!("Cube Count Error: {msg}"));
    }
}
