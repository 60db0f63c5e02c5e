use crate::{params::PhysicalParams, state::CartPoleState, types::Float};

/// Energy of the pole at the upright rest state, the swing-up target.
pub const UPRIGHT_ENERGY: Float = 0.0;

/// Mechanical energy of the pole relative to the upright rest state
/// E = 1/2 J θ̇² + m g L (cos θ - 1)
/// Upright at rest gives 0, hanging at rest gives -2mgL.
///
/// The cart's kinetic energy is left out; only the pole is being pumped.
pub fn pendulum_energy(state: &CartPoleState, params: &PhysicalParams) -> Float {
    let theta = state.theta();
    let theta_dot = state.theta_dot();
    let J = params.moment_of_inertia();

    let KE = 0.5 * J * theta_dot * theta_dot;
    let PE = params.mass_pole * params.gravity * params.length * (theta.cos() - 1.0);
    KE + PE
}

#[cfg(test)]
mod energy_tests {
    use super::*;
    use crate::{assert_close, PI};

    #[test]
    fn upright_at_rest_is_zero() {
        let params = PhysicalParams::default();
        let E = pendulum_energy(&CartPoleState::zeros(), &params);
        assert_close!(E, UPRIGHT_ENERGY, 1e-12);
    }

    #[test]
    fn hanging_at_rest() {
        let params = PhysicalParams::default();
        let E = pendulum_energy(&CartPoleState::hanging(), &params);
        let expected = -2.0 * params.mass_pole * params.gravity * params.length;
        assert_close!(E, expected, 1e-12);
    }

    #[test]
    fn cart_motion_does_not_count() {
        let params = PhysicalParams::default();
        let still = pendulum_energy(&CartPoleState::new(0., 0., PI / 2.0, 1.0), &params);
        let moving = pendulum_energy(&CartPoleState::new(3., -2., PI / 2.0, 1.0), &params);
        assert_close!(still, moving, 1e-12);
        // cos(π/2) - 1 = -1
        let expected = 0.5 * params.moment_of_inertia()
            - params.mass_pole * params.gravity * params.length;
        assert_close!(still, expected, 1e-12);
    }
}
