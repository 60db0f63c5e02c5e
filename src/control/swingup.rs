use na::{vector, RowVector2};

use crate::{
    energy::{pendulum_energy, UPRIGHT_ENERGY},
    params::PhysicalParams,
    state::CartPoleState,
    types::Float,
    util::sign,
};

/// Gain of the bang-bang energy pumping term
pub const ETA: Float = 5.4;

/// Cart position and velocity gains
pub const K_CART: [Float; 2] = [4.0, 6.0];

/// Energy-based swing-up for the cart-pole.
///
/// The energy error is pushed towards zero by a bang-bang force whose sign
/// follows ω = m L θ̇ cos θ (E_0 - E), while a PD term on the cart keeps it
/// near the origin:
/// u = -η sign(ω) - K [x, ẋ]^T
///
/// Ref:
///     1. Swinging up a pendulum by energy control, K.J. Åström and K.
///     Furuta, 2000
///     2. https://underactuated.csail.mit.edu/acrobot.html#section6
#[derive(Clone, Debug, PartialEq)]
pub struct EnergySwingUp {
    pub params: PhysicalParams,
    pub eta: Float,
    pub k_cart: RowVector2<Float>,
}

impl EnergySwingUp {
    pub fn new(params: PhysicalParams) -> Self {
        EnergySwingUp {
            params,
            eta: ETA,
            k_cart: RowVector2::new(K_CART[0], K_CART[1]),
        }
    }

    pub fn force(&self, state: &CartPoleState) -> Float {
        let m = self.params.mass_pole;
        let l = self.params.length;
        let theta = state.theta();
        let theta_dot = state.theta_dot();

        let E = pendulum_energy(state, &self.params);
        let omega = m * l * theta_dot * theta.cos() * (UPRIGHT_ENERGY - E);

        let u_swing = -self.eta * sign(omega);
        let u_cart = (self.k_cart * vector![state.x(), state.x_dot()])[0];
        u_swing - u_cart
    }
}

#[cfg(test)]
mod swingup_tests {
    use super::*;
    use crate::{assert_close, PI};

    #[test]
    fn hanging_at_rest_gives_zero() {
        let law = EnergySwingUp::new(PhysicalParams::default());
        let u = law.force(&CartPoleState::hanging());
        assert_eq!(u, 0.0);
    }

    #[test]
    fn pumps_with_swing() {
        // Hanging, swinging with positive θ̇: cos θ < 0 and E < 0, so ω < 0
        // and the pumping term is +η.
        let law = EnergySwingUp::new(PhysicalParams::default());
        let u = law.force(&CartPoleState::new(0., 0., PI, 1.0));
        assert_close!(u, ETA, 1e-12);

        let u = law.force(&CartPoleState::new(0., 0., PI, -1.0));
        assert_close!(u, -ETA, 1e-12);
    }

    #[test]
    fn cart_term_pulls_back_to_origin() {
        let law = EnergySwingUp::new(PhysicalParams::default());
        let u = law.force(&CartPoleState::new(1.0, 0., PI, 0.));
        assert_close!(u, -4.0, 1e-12);

        let u = law.force(&CartPoleState::new(1.0, 0.5, PI, 1.0));
        assert_close!(u, ETA - 4.0 - 3.0, 1e-12);
    }

    #[test]
    fn no_pumping_at_target_energy() {
        let law = EnergySwingUp::new(PhysicalParams::default());
        let u = law.force(&CartPoleState::zeros());
        assert_eq!(u, 0.0);
    }
}
