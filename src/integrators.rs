use serde::{Deserialize, Serialize};

use crate::{state::CartPoleState, types::Float};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Integrator {
    /// Positions advance with the old velocities
    #[default]
    Euler,
    /// Velocities first, then positions with the new velocities
    SemiImplicitEuler,
}

/// Advance the state by dt given the cart and pole accelerations.
pub fn integrate(
    state: &CartPoleState,
    x_acc: Float,
    theta_acc: Float,
    dt: Float,
    integrator: Integrator,
) -> CartPoleState {
    let [x, x_dot, theta, theta_dot] = state.to_array();
    match integrator {
        Integrator::Euler => CartPoleState::new(
            x + dt * x_dot,
            x_dot + dt * x_acc,
            theta + dt * theta_dot,
            theta_dot + dt * theta_acc,
        ),
        Integrator::SemiImplicitEuler => {
            // Note: keeps the energy of an undamped pendulum bounded, unlike
            // explicit Euler which slowly pumps energy in.
            let x_dot = x_dot + dt * x_acc;
            let theta_dot = theta_dot + dt * theta_acc;
            CartPoleState::new(x + dt * x_dot, x_dot, theta + dt * theta_dot, theta_dot)
        }
    }
}
