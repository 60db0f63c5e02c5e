use na::Vector4;

use crate::{types::Float, PI};

/// Snapshot of a cart-pole: [x, x_dot, theta, theta_dot].
///
/// theta is measured from the upright position, so a hanging pole sits at
/// theta = π. The angle is not wrapped and may grow past ±2π when the pole
/// spins over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CartPoleState(pub Vector4<Float>);

impl CartPoleState {
    pub fn new(x: Float, x_dot: Float, theta: Float, theta_dot: Float) -> Self {
        CartPoleState(Vector4::new(x, x_dot, theta, theta_dot))
    }

    pub fn zeros() -> Self {
        CartPoleState(Vector4::zeros())
    }

    /// Pole hanging straight down, everything at rest
    pub fn hanging() -> Self {
        Self::new(0., 0., PI, 0.)
    }

    pub fn x(&self) -> Float {
        self.0[0]
    }

    pub fn x_dot(&self) -> Float {
        self.0[1]
    }

    pub fn theta(&self) -> Float {
        self.0[2]
    }

    pub fn theta_dot(&self) -> Float {
        self.0[3]
    }

    pub fn to_array(&self) -> [Float; 4] {
        [self.0[0], self.0[1], self.0[2], self.0[3]]
    }
}

impl From<[Float; 4]> for CartPoleState {
    fn from(s: [Float; 4]) -> Self {
        Self::new(s[0], s[1], s[2], s[3])
    }
}
