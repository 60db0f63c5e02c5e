use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config::EnvConfig,
    control::Direction,
    env::{Environment, StepResult},
    integrators::{integrate, Integrator},
    params::PhysicalParams,
    state::CartPoleState,
    types::Float,
};

/// Classic-control cart-pole.
///
/// ```text
///          θ
///          |  /
///          | /  pole, half-length l
///       ___|/___
///      |________|  ---> +x, force F
/// ```
///
/// θ = 0 is upright; positive θ tips the pole towards +x.
/// Ref: Correct equations for the dynamics of the cart-pole system,
/// Razvan V. Florian, 2007
pub struct CartPoleEnv {
    state: CartPoleState,

    pub mass_cart: Float,
    pub mass_pole: Float,
    pub length: Float,
    pub gravity: Float,
    pub force_mag: Float,
    pub tau: Float,
    pub integrator: Integrator,

    pub x_threshold: Float,
    pub theta_threshold: Float,
    pub max_episode_steps: usize,

    steps: usize,
    done: bool,
    rng: StdRng,
}

impl CartPoleEnv {
    pub fn new(config: &EnvConfig) -> Self {
        CartPoleEnv {
            state: CartPoleState::zeros(),
            mass_cart: 1.0,
            mass_pole: 0.1,
            length: 0.5,
            gravity: config.gravity,
            force_mag: 10.0,
            tau: config.tau,
            integrator: config.integrator,
            x_threshold: config.x_threshold,
            theta_threshold: config.theta_threshold,
            max_episode_steps: config.max_episode_steps,
            steps: 0,
            done: false,
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    pub fn with_params(config: &EnvConfig, params: &PhysicalParams) -> Self {
        let mut env = Self::new(config);
        env.set_physical_params(params);
        env
    }

    /// Steps taken since the last reset
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Cart and pole accelerations under horizontal force on the cart.
    /// Derived masses come from the current parameters on every call.
    pub fn accelerations(&self, force: Float) -> (Float, Float) {
        let theta = self.state.theta();
        let theta_dot = self.state.theta_dot();
        let cos_theta = theta.cos();
        let sin_theta = theta.sin();

        let total_mass = self.mass_cart + self.mass_pole;
        let polemass_length = self.mass_pole * self.length;

        let temp = (force + polemass_length * theta_dot * theta_dot * sin_theta) / total_mass;
        let theta_acc = (self.gravity * sin_theta - cos_theta * temp)
            / (self.length
                * (4.0 / 3.0 - self.mass_pole * cos_theta * cos_theta / total_mass));
        let x_acc = temp - polemass_length * theta_acc * cos_theta / total_mass;
        (x_acc, theta_acc)
    }

    fn out_of_bounds(&self) -> bool {
        self.state.x().abs() > self.x_threshold || self.state.theta().abs() > self.theta_threshold
    }
}

impl Environment for CartPoleEnv {
    fn reset(&mut self) -> CartPoleState {
        let mut s = [0.; 4];
        for v in s.iter_mut() {
            *v = self.rng.random_range(-0.05..0.05);
        }
        self.state = CartPoleState::from(s);
        self.steps = 0;
        self.done = false;
        self.state
    }

    fn step(&mut self, action: Direction) -> StepResult {
        if self.done {
            tracing::warn!(
                "step() called on a finished episode after {} steps; call reset() first",
                self.steps
            );
        }

        let force = action.sign() * self.force_mag;
        let (x_acc, theta_acc) = self.accelerations(force);
        self.state = integrate(&self.state, x_acc, theta_acc, self.tau, self.integrator);
        self.steps += 1;

        let out_of_bounds = self.out_of_bounds();
        let truncated = self.steps >= self.max_episode_steps;
        self.done = out_of_bounds || truncated;
        if self.done {
            tracing::debug!(
                steps = self.steps,
                out_of_bounds,
                truncated,
                "episode finished"
            );
        }

        StepResult {
            observation: self.state,
            reward: 1.0,
            done: self.done,
        }
    }

    fn internal_state(&self) -> CartPoleState {
        self.state
    }

    fn set_state(&mut self, state: CartPoleState) {
        self.state = state;
    }

    fn set_force_mag(&mut self, force_mag: Float) {
        self.force_mag = force_mag;
    }

    fn physical_params(&self) -> PhysicalParams {
        PhysicalParams {
            mass_cart: self.mass_cart,
            mass_pole: self.mass_pole,
            length: self.length,
            gravity: self.gravity,
        }
    }

    fn set_physical_params(&mut self, params: &PhysicalParams) {
        self.mass_cart = params.mass_cart;
        self.mass_pole = params.mass_pole;
        self.length = params.length;
    }
}

#[cfg(test)]
mod cart_pole_tests {
    use super::*;
    use crate::{assert_close, PI};

    fn env() -> CartPoleEnv {
        CartPoleEnv::with_params(&EnvConfig::default(), &PhysicalParams::default())
    }

    #[test]
    fn hanging_at_rest_stays_at_rest() {
        // Arrange
        let mut env = env();
        env.set_state(CartPoleState::hanging());
        env.set_force_mag(0.0);

        // Act
        for _ in 0..100 {
            env.step(Direction::PushLeft);
        }

        // Assert
        let state = env.internal_state();
        assert_close!(state.theta(), PI, 1e-9);
        assert_close!(state.x(), 0.0, 1e-9);
        assert_close!(state.theta_dot(), 0.0, 1e-9);
    }

    #[test]
    fn tilted_pole_falls_further() {
        let mut env = env();
        env.set_state(CartPoleState::new(0., 0., 0.05, 0.));
        env.set_force_mag(0.0);

        for _ in 0..10 {
            env.step(Direction::PushLeft);
        }

        let state = env.internal_state();
        assert!(state.theta() > 0.05, "theta: {}", state.theta());
        assert!(state.theta_dot() > 0.0);
        // The pole falling towards +x pushes the cart back towards -x
        assert!(state.x_dot() < 0.0, "x_dot: {}", state.x_dot());
    }

    #[test]
    fn push_right_accelerates_cart_right() {
        let mut env = env();
        env.set_state(CartPoleState::hanging());
        env.set_force_mag(5.0);

        env.step(Direction::PushRight);
        let result = env.step(Direction::PushRight);

        assert!(result.observation.x_dot() > 0.0);
        assert!(result.observation.x() > 0.0);
        assert!(!result.done);
        assert_eq!(result.reward, 1.0);
    }

    #[test]
    fn cart_out_of_bounds_is_done() {
        let mut env = env();
        env.set_state(CartPoleState::new(2.39, 1.0, PI, 0.));
        env.set_force_mag(0.0);

        let result = env.step(Direction::PushLeft);

        assert!(result.observation.x() > env.x_threshold);
        assert!(result.done);
    }

    #[test]
    fn episode_step_limit() {
        let config = EnvConfig {
            max_episode_steps: 3,
            ..Default::default()
        };
        let mut env = CartPoleEnv::with_params(&config, &PhysicalParams::default());
        env.reset();
        env.set_state(CartPoleState::hanging());
        env.set_force_mag(0.0);

        assert!(!env.step(Direction::PushLeft).done);
        assert!(!env.step(Direction::PushLeft).done);
        assert!(env.step(Direction::PushLeft).done);
        assert_eq!(env.steps(), 3);
    }

    #[test]
    fn seeded_reset_is_reproducible() {
        let mut a = env();
        let mut b = env();
        let sa = a.reset();
        let sb = b.reset();
        assert_eq!(sa, sb);
        for v in sa.to_array() {
            assert!((-0.05..0.05).contains(&v));
        }

        let other = CartPoleEnv::new(&EnvConfig {
            seed: 2,
            ..Default::default()
        })
        .reset();
        assert_ne!(sa, other);
    }

    #[test]
    fn physical_params_round_trip() {
        let mut env = CartPoleEnv::new(&EnvConfig::default());
        let params = PhysicalParams {
            mass_cart: 3.0,
            mass_pole: 0.2,
            length: 0.4,
            ..Default::default()
        };
        env.set_physical_params(&params);

        let read = env.physical_params();
        assert_eq!(read.mass_cart, 3.0);
        assert_eq!(read.mass_pole, 0.2);
        assert_eq!(read.length, 0.4);
        // Gravity belongs to the simulation, not the controller constants
        assert_eq!(read.gravity, EnvConfig::default().gravity);
    }

    #[test]
    fn physical_params_change_dynamics() {
        let light = env();
        let mut heavy = env();
        heavy.set_physical_params(&PhysicalParams {
            mass_cart: 20.0,
            ..Default::default()
        });

        let (light_acc, _) = light.accelerations(1.0);
        let (heavy_acc, _) = heavy.accelerations(1.0);
        assert!(light_acc > heavy_acc);
    }
}
