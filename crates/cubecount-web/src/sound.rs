use std::cell::RefCell;
use std::rc::Rc;

use cubecount_audio::AudioSystem;
use cubecount_core::types::SoundKind;
use cubecount_game::SoundAdapter;

/// Audio shared between the sound adapter and the page's sound controls.
pub type SharedAudio = Rc<RefCell<AudioSystem>>;

/// Sound adapter over the Web Audio backed [`AudioSystem`].
pub struct WebSound {
    audio: SharedAudio,
}

impl WebSound {
    pub fn new(audio: SharedAudio) -> Self {
        Self { audio }
    }
}

impl SoundAdapter for WebSound {
    fn play(&mut self, kind: SoundKind) {
        self.audio.borrow_mut().play(kind);
    }

    fn play_after(&mut self, kind: SoundKind, delay_ms: u32) {
        self.audio.borrow_mut().play_after(kind, delay_ms);
    }
}

/// Read a volume slider value (0..=1). Garbage leaves the volume alone.
pub fn parse_volume(raw: &str) -> Option<f32> {
    raw.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

/// Slider text for the current volume.
pub fn volume_text(audio: &AudioSystem) -> String {
    format!("{:.2}", audio.volume())
}
