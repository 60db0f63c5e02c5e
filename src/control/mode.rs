use crate::{types::Float, PI, TWO_PI};

/// Half-width of the band around upright in which the linear law takes over.
pub const UPRIGHT_BAND: Float = PI / 9.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    SwingUp,
    Stabilize,
}

/// Reduce theta into [0, 2π) by floor division.
/// Returns (normalized, turns) such that theta = normalized + turns * 2π.
pub fn normalize_angle(theta: Float) -> (Float, Float) {
    let turns = (theta / TWO_PI).floor();
    (theta - turns * TWO_PI, turns)
}

/// Whether theta, once normalized, lies in the open band (-π/9, π/9) around upright.
pub fn in_upright_band(theta: Float) -> bool {
    let (angle, _) = normalize_angle(theta);
    angle < UPRIGHT_BAND || angle > TWO_PI - UPRIGHT_BAND
}

/// One-way latch from swing-up to stabilize.
#[derive(Clone, Debug, Default)]
pub struct ModeSelector {
    mode: Mode,
}

impl ModeSelector {
    pub fn new() -> Self {
        ModeSelector {
            mode: Mode::SwingUp,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Latch to `Stabilize` if theta is near upright. Never reverts.
    pub fn update(&mut self, theta: Float) -> Mode {
        if self.mode == Mode::SwingUp && in_upright_band(theta) {
            tracing::info!(theta, "pole near upright, switching to stabilization");
            self.mode = Mode::Stabilize;
        }
        self.mode
    }
}

#[cfg(test)]
mod mode_tests {
    use super::*;
    use crate::assert_close;

    #[test]
    fn band_around_upright_latches() {
        let samples = [-PI / 9.0 + 1e-6, -0.2, -1e-9, 0.0, 1e-9, 0.3, PI / 9.0 - 1e-6];
        for theta in samples {
            let mut selector = ModeSelector::new();
            assert_eq!(selector.update(theta), Mode::Stabilize, "theta: {}", theta);
        }
    }

    #[test]
    fn hanging_stays_swing_up() {
        let mut selector = ModeSelector::new();
        assert_eq!(selector.update(PI), Mode::SwingUp);
        assert_eq!(selector.update(-PI), Mode::SwingUp);
        assert_eq!(selector.update(PI / 9.0 + 1e-6), Mode::SwingUp);
        assert_eq!(selector.update(-PI / 9.0 - 1e-6), Mode::SwingUp);
        assert_eq!(selector.mode(), Mode::SwingUp);
    }

    #[test]
    fn latch_is_monotonic() {
        let mut selector = ModeSelector::new();
        selector.update(0.05);
        for theta in [PI, 2.0, -3.0, 100.0, PI / 2.0] {
            assert_eq!(selector.update(theta), Mode::Stabilize);
        }
    }

    #[test]
    fn full_turns_count_as_upright() {
        for k in [-3.0, -1.0, 1.0, 2.0, 5.0] {
            let theta = k * TWO_PI;
            let (angle, turns) = normalize_angle(theta);
            assert_eq!(turns, k);
            assert_close!(angle, 0.0, 1e-9);
            assert!(in_upright_band(theta));
            assert!(in_upright_band(theta + 0.1));
            assert!(!in_upright_band(theta + PI));
        }
    }

    #[test]
    fn normalize_round_trip() {
        for theta in [-50.3, -TWO_PI, -1.0, 0.0, 0.5, PI, 7.0, 123.456] {
            let (angle, turns) = normalize_angle(theta);
            assert!((0.0..TWO_PI).contains(&angle), "angle: {}", angle);
            assert_close!(angle + turns * TWO_PI, theta, 1e-9);
        }
    }
}
