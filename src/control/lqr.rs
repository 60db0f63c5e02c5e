use na::{Matrix1x4, Vector4};

use crate::{state::CartPoleState, types::Float};

/// Linear Quadratic Regulator for the cart-pole around upright, in the
/// order [θ, θ̇, x, ẋ].
/// Hard-coded from an offline LQR solution of the linearized dynamics for
/// m_c = 2, m_p = 0.1, l = 0.25.
pub const K_LQR: [Float; 4] = [-56.83602134, -10.38689076, -3.16227766, -4.93567592];

/// Reference: https://underactuated.csail.mit.edu/lqr.html
#[derive(Clone, Debug, PartialEq)]
pub struct LinearStabilizer {
    pub K: Matrix1x4<Float>,
}

impl Default for LinearStabilizer {
    fn default() -> Self {
        LinearStabilizer {
            K: Matrix1x4::new(K_LQR[0], K_LQR[1], K_LQR[2], K_LQR[3]),
        }
    }
}

impl LinearStabilizer {
    pub fn new(K: Matrix1x4<Float>) -> Self {
        LinearStabilizer { K }
    }

    /// u = -K * xbar, with the upright rest state as operating point
    pub fn force(&self, state: &CartPoleState) -> Float {
        let xbar = Vector4::new(state.theta(), state.theta_dot(), state.x(), state.x_dot());
        let u = -self.K * xbar;
        u[0]
    }
}
