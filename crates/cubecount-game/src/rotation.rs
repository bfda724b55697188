/// Tracks a horizontal drag gesture (pointer or touch).
///
/// Tracking is unconditional: start, move and end are always recorded so a
/// drag that begins while rotation is locked still reports sane deltas once
/// it unlocks. Whether a delta turns the structure is up to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragTracker {
    last_x: Option<f32>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, x: f32) {
        self.last_x = Some(x);
    }

    /// Record a new sample. Returns the horizontal delta since the previous
    /// sample, or `None` when no drag is in progress.
    pub fn move_to(&mut self, x: f32) -> Option<f32> {
        let last = self.last_x.as_mut()?;
        let dx = x - *last;
        *last = x;
        Some(dx)
    }

    pub fn end(&mut self) {
        self.last_x = None;
    }
}

/// Radians to turn for `dx` pixels of horizontal movement.
pub fn rotation_delta(dx: f32, sensitivity: f32) -> f32 {
    dx * sensitivity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_without_start_is_ignored() {
        let mut drag = DragTracker::new();
        assert_eq!(drag.move_to(10.0), None);
        assert_eq!(drag.move_to(20.0), None);
    }

    #[test]
    fn test_deltas_between_samples() {
        let mut drag = DragTracker::new();
        drag.start(100.0);
        assert_eq!(drag.move_to(110.0), Some(10.0));
        assert_eq!(drag.move_to(105.0), Some(-5.0));
        drag.end();
        assert_eq!(drag.move_to(200.0), None);
    }

    #[test]
    fn test_rotation_delta() {
        assert!((rotation_delta(50.0, 0.01) - 0.5).abs() < 1e-6);
        assert!((rotation_delta(-20.0, 0.01) + 0.2).abs() < 1e-6);
    }
}
