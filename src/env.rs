use crate::{control::Direction, params::PhysicalParams, state::CartPoleState, types::Float};

pub struct StepResult {
    pub observation: CartPoleState,
    pub reward: Float,
    /// Episode over: bounds exceeded or step limit reached
    pub done: bool,
}

/// What the driver needs from a cart-pole simulation.
///
/// The observation returned by `reset`/`step` and the `internal_state` are
/// separate accessors; an implementation may report them differently
/// (e.g. a wrapped observation angle over an unbounded internal one).
pub trait Environment {
    fn reset(&mut self) -> CartPoleState;

    fn step(&mut self, action: Direction) -> StepResult;

    fn internal_state(&self) -> CartPoleState;

    fn set_state(&mut self, state: CartPoleState);

    /// Magnitude of the force applied by the next `step`
    fn set_force_mag(&mut self, force_mag: Float);

    fn physical_params(&self) -> PhysicalParams;

    fn set_physical_params(&mut self, params: &PhysicalParams);
}
