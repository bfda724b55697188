use wasm_bindgen::prelude::*;
use web_sys::{AudioContext, AudioContextState, GainNode, OscillatorType};

use crate::melody::{Note, Waveform};

/// Peak gain of a single note before the master volume.
const NOTE_GAIN: f32 = 0.35;

/// Attack time of each note's envelope, in seconds.
const ATTACK_S: f64 = 0.01;

/// Wraps the Web Audio API: one AudioContext and a master gain node.
pub struct AudioBridge {
    ctx: AudioContext,
    master_gain: GainNode,
}

impl AudioBridge {
    pub fn new(volume: f32) -> Result<Self, JsValue> {
        let ctx = AudioContext::new()?;
        let master_gain = ctx.create_gain()?;
        master_gain.connect_with_audio_node(&ctx.destination())?;
        master_gain.gain().set_value(volume.clamp(0.0, 1.0));
        Ok(Self { ctx, master_gain })
    }

    pub fn set_master_volume(&self, volume: f32) {
        self.master_gain.gain().set_value(volume.clamp(0.0, 1.0));
    }

    /// Resume a suspended context. Browsers suspend contexts created
    /// before a user gesture; the returned promise is ignored.
    pub fn resume(&self) {
        if self.ctx.state() == AudioContextState::Suspended {
            let _ = self.ctx.resume();
        }
    }

    /// Schedule `notes` to start `delay_s` seconds from now. Each note gets
    /// its own oscillator and a short attack / linear release envelope; the
    /// nodes disconnect themselves once stopped.
    pub fn schedule(&self, notes: &[Note], waveform: Waveform, delay_s: f64) -> Result<(), JsValue> {
        let start = self.ctx.current_time() + delay_s;
        let osc_type = match waveform {
            Waveform::Sine => OscillatorType::Sine,
            Waveform::Triangle => OscillatorType::Triangle,
            Waveform::Square => OscillatorType::Square,
        };

        for note in notes {
            let t0 = start + note.offset_s as f64;
            let t1 = t0 + note.duration_s as f64;

            let osc = self.ctx.create_oscillator()?;
            osc.set_type(osc_type);
            osc.frequency().set_value(note.freq_hz);

            let gain = self.ctx.create_gain()?;
            let param = gain.gain();
            param.set_value_at_time(0.0, t0)?;
            param.linear_ramp_to_value_at_time(NOTE_GAIN, t0 + ATTACK_S)?;
            param.linear_ramp_to_value_at_time(0.0, t1)?;

            osc.connect_with_audio_node(&gain)?;
            gain.connect_with_audio_node(&self.master_gain)?;

            #[allow(deprecated)]
            {
                osc.start_with_when(t0)?;
                osc.stop_with_when(t1 + 0.02)?;
            }
        }
        Ok(())
    }
}
