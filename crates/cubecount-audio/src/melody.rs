use cubecount_core::types::SoundKind;

/// Oscillator shape for a jingle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
    Square,
}

/// One tone of a jingle, timed relative to the jingle start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    pub freq_hz: f32,
    pub offset_s: f32,
    pub duration_s: f32,
}

const fn note(freq_hz: f32, offset_s: f32, duration_s: f32) -> Note {
    Note {
        freq_hz,
        offset_s,
        duration_s,
    }
}

// Rising major triad.
const CORRECT: [Note; 3] = [
    note(523.25, 0.0, 0.12),
    note(659.25, 0.1, 0.12),
    note(783.99, 0.2, 0.22),
];

// Falling minor step, low and buzzy.
const WRONG: [Note; 2] = [note(220.0, 0.0, 0.18), note(174.61, 0.2, 0.32)];

const VICTORY: [Note; 6] = [
    note(523.25, 0.0, 0.14),
    note(659.25, 0.15, 0.14),
    note(783.99, 0.3, 0.14),
    note(1046.5, 0.45, 0.3),
    note(783.99, 0.8, 0.12),
    note(1046.5, 0.95, 0.6),
];

/// Note sequence for a sound effect.
pub fn melody(kind: SoundKind) -> &'static [Note] {
    match kind {
        SoundKind::Correct => &CORRECT,
        SoundKind::Wrong => &WRONG,
        SoundKind::Victory => &VICTORY,
    }
}

pub fn waveform(kind: SoundKind) -> Waveform {
    match kind {
        SoundKind::Correct => Waveform::Triangle,
        SoundKind::Wrong => Waveform::Square,
        SoundKind::Victory => Waveform::Sine,
    }
}
