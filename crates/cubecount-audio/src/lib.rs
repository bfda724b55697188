pub mod melody;

#[cfg(target_arch = "wasm32")]
pub mod bridge;

pub use melody::{Note, Waveform};

use cubecount_core::types::SoundKind;

/// Top-level audio facade. On wasm it owns a lazily created Web Audio
/// bridge; natively every call is a no-op.
///
/// Playback is best effort: a context that cannot be created (autoplay
/// policy, no audio device) is logged at debug level and otherwise ignored.
pub struct AudioSystem {
    #[cfg(target_arch = "wasm32")]
    bridge: Option<bridge::AudioBridge>,
    enabled: bool,
    volume: f32,
}

impl Default for AudioSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSystem {
    /// Create an enabled system. The AudioContext is created on the first
    /// play, which always follows a user gesture (an answer submission).
    pub fn new() -> Self {
        Self {
            #[cfg(target_arch = "wasm32")]
            bridge: None,
            enabled: true,
            volume: 0.7,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled == self.enabled {
            return;
        }
        self.enabled = enabled;
        #[cfg(target_arch = "wasm32")]
        if !enabled {
            self.bridge = None;
        }
        log::info!("Audio {}", if enabled { "enabled" } else { "disabled" });
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set the master volume (0.0-1.0).
    pub fn set_volume(&mut self, vol: f32) {
        self.volume = vol.clamp(0.0, 1.0);
        #[cfg(target_arch = "wasm32")]
        if let Some(ref b) = self.bridge {
            b.set_master_volume(self.volume);
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn play(&mut self, kind: SoundKind) {
        self.play_after(kind, 0);
    }

    /// Play `kind` after `delay_ms`. The delay is scheduled on the audio
    /// clock, not with a timer.
    pub fn play_after(&mut self, kind: SoundKind, delay_ms: u32) {
        if !self.enabled {
            return;
        }

        #[cfg(target_arch = "wasm32")]
        {
            if self.bridge.is_none() {
                match bridge::AudioBridge::new(self.volume) {
                    Ok(b) => self.bridge = Some(b),
                    Err(e) => {
                        log::debug!("Audio unavailable: {:?}", e);
                        return;
                    }
                }
            }
            if let Some(ref b) = self.bridge {
                b.resume();
                let delay_s = delay_ms as f64 / 1000.0;
                if let Err(e) = b.schedule(melody::melody(kind), melody::waveform(kind), delay_s) {
                    log::debug!("Failed to play {} sound: {:?}", kind.name(), e);
                }
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            log::trace!("play {} (+{delay_ms} ms)", kind.name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_play_is_noop() {
        let mut sys = AudioSystem::new();
        assert!(sys.is_enabled());
        sys.play(SoundKind::Correct);
        sys.play_after(SoundKind::Victory, 600);
    }

    #[test]
    fn test_disabled_skips_playback() {
        let mut sys = AudioSystem::new();
        sys.set_enabled(false);
        assert!(!sys.is_enabled());
        sys.play(SoundKind::Wrong);
        sys.set_enabled(true);
        assert!(sys.is_enabled());
    }

    #[test]
    fn test_volume_clamp() {
        let mut sys = AudioSystem::new();
        sys.set_volume(1.5);
        assert!((sys.volume() - 1.0).abs() < f32::EPSILON);
        sys.set_volume(-0.5);
        assert!(sys.volume().abs() < f32::EPSILON);
        sys.set_volume(0.5);
        assert!((sys.volume() - 0.5).abs() < f32::EPSILON);
    }
}
