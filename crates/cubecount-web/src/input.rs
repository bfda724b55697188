use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
    Event, EventTarget, HtmlCanvasElement, HtmlElement, HtmlInputElement, KeyboardEvent,
    MouseEvent, PointerEvent, Window,
};

use crate::app::Application;
use crate::dom::{DomDialog, PendingAction};
use crate::error::WebError;
use crate::sound::{parse_volume, SharedAudio};

pub type AppRc = Rc<RefCell<Application>>;

/// Elements the listeners attach to.
pub struct Targets<'a> {
    pub window: &'a Window,
    pub canvas: &'a HtmlCanvasElement,
    pub answer: &'a HtmlInputElement,
    pub submit: &'a HtmlElement,
    pub dialog_root: &'a HtmlElement,
    pub dialog_confirm: &'a HtmlElement,
    pub dialog_cancel: &'a HtmlElement,
    pub restart: &'a HtmlElement,
    pub sound_toggle: &'a HtmlInputElement,
    pub volume: &'a HtmlInputElement,
}

/// Attach `handler` to `target` for the app's lifetime.
fn listen<E, F>(target: &EventTarget, event: &'static str, handler: F) -> Result<(), WebError>
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|_| WebError::Listener(event))?;
    closure.forget();
    Ok(())
}

/// Register every listener ONCE at start-up. Each handler only translates
/// the event into a call on the application.
pub fn register_listeners(
    targets: &Targets<'_>,
    app: AppRc,
    pending: PendingAction,
    audio: SharedAudio,
) -> Result<(), WebError> {
    register_drag(targets.canvas, &app)?;
    register_sound_controls(targets.sound_toggle, targets.volume, audio)?;

    // submit button and Enter key
    {
        let app = app.clone();
        listen(targets.submit, "click", move |_: MouseEvent| {
            app.borrow_mut().submit();
        })?;
    }
    {
        let app = app.clone();
        listen(targets.answer, "keydown", move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                app.borrow_mut().submit();
            }
        })?;
    }

    // dialog buttons
    {
        let app = app.clone();
        let root = targets.dialog_root.clone();
        let pending = pending.clone();
        listen(targets.dialog_confirm, "click", move |_: MouseEvent| {
            if let Some(action) = DomDialog::close(&root, &pending) {
                app.borrow_mut().confirm(action);
            }
        })?;
    }
    {
        let root = targets.dialog_root.clone();
        listen(targets.dialog_cancel, "click", move |_: MouseEvent| {
            if let Some(action) = DomDialog::close(&root, &pending) {
                log::debug!("Dialog cancelled, dropping {action:?}");
            }
        })?;
    }

    {
        let app = app.clone();
        listen(targets.restart, "click", move |_: MouseEvent| {
            app.borrow_mut().restart();
        })?;
    }

    listen(targets.window, "resize", move |_: Event| {
        app.borrow_mut().resize();
    })?;

    Ok(())
}

/// Horizontal drag on the canvas. Pointer events cover mouse, pen and
/// touch; the canvas sets `touch-action: none` so the page does not scroll.
fn register_drag(canvas: &HtmlCanvasElement, app: &AppRc) -> Result<(), WebError> {
    let target: &EventTarget = canvas.as_ref();

    {
        let app = app.clone();
        let canvas = canvas.clone();
        listen(target, "pointerdown", move |e: PointerEvent| {
            let _ = canvas.set_pointer_capture(e.pointer_id());
            app.borrow_mut().drag_start(e.client_x() as f32);
        })?;
    }
    {
        let app = app.clone();
        listen(target, "pointermove", move |e: PointerEvent| {
            app.borrow_mut().drag_move(e.client_x() as f32);
        })?;
    }
    for event in ["pointerup", "pointercancel"] {
        let app = app.clone();
        listen(target, event, move |_: PointerEvent| {
            app.borrow_mut().drag_end();
        })?;
    }

    Ok(())
}

/// Mute checkbox and volume slider.
fn register_sound_controls(
    toggle: &HtmlInputElement,
    volume: &HtmlInputElement,
    audio: SharedAudio,
) -> Result<(), WebError> {
    {
        let audio = audio.clone();
        let toggle_el = toggle.clone();
        listen(toggle, "change", move |_: Event| {
            audio.borrow_mut().set_enabled(toggle_el.checked());
        })?;
    }
    {
        let volume_el = volume.clone();
        listen(volume, "input", move |_: Event| {
            if let Some(v) = parse_volume(&volume_el.value()) {
                audio.borrow_mut().set_volume(v);
            }
        })?;
    }
    Ok(())
}
