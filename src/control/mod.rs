use crate::{params::PhysicalParams, state::CartPoleState, types::Float};

pub mod lqr;
pub mod mode;
pub mod swingup;

use lqr::LinearStabilizer;
use mode::{Mode, ModeSelector};
use swingup::EnergySwingUp;

/// Which way the cart is pushed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    PushLeft,
    PushRight,
}

impl Direction {
    /// Discrete action index: 0 pushes left, 1 pushes right
    pub fn action(&self) -> usize {
        match self {
            Direction::PushLeft => 0,
            Direction::PushRight => 1,
        }
    }

    pub fn sign(&self) -> Float {
        match self {
            Direction::PushLeft => -1.0,
            Direction::PushRight => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlOutput {
    pub direction: Direction,
    pub magnitude: Float,
}

impl ControlOutput {
    /// Only a strictly positive force pushes right; u = 0 is (PushLeft, 0).
    pub fn from_force(u: Float) -> Self {
        let direction = if u > 0. {
            Direction::PushRight
        } else {
            Direction::PushLeft
        };
        ControlOutput {
            direction,
            magnitude: u.abs(),
        }
    }

    pub fn signed_force(&self) -> Float {
        self.direction.sign() * self.magnitude
    }
}

pub enum ControlLaw {
    EnergySwingUp(EnergySwingUp),
    Linear(LinearStabilizer),
}

impl ControlLaw {
    pub fn force(&self, state: &CartPoleState) -> Float {
        match self {
            ControlLaw::EnergySwingUp(law) => law.force(state),
            ControlLaw::Linear(law) => law.force(state),
        }
    }
}

pub trait Controller {
    /// Sees the environment's raw pole angle before each `control` call.
    fn observe_angle(&mut self, _theta: Float) {}

    fn control(&mut self, state: &CartPoleState) -> ControlOutput;

    fn mode(&self) -> Option<Mode> {
        None
    }
}

/// Energy swing-up until the pole first comes near upright, then linear
/// stabilization for good.
pub struct SwingUpController {
    selector: ModeSelector,
    swing_up: ControlLaw,
    stabilize: ControlLaw,
}

impl SwingUpController {
    pub fn new(params: PhysicalParams) -> Self {
        Self::with_laws(
            ControlLaw::EnergySwingUp(EnergySwingUp::new(params)),
            ControlLaw::Linear(LinearStabilizer::default()),
        )
    }

    pub fn with_laws(swing_up: ControlLaw, stabilize: ControlLaw) -> Self {
        SwingUpController {
            selector: ModeSelector::new(),
            swing_up,
            stabilize,
        }
    }

    pub fn current_mode(&self) -> Mode {
        self.selector.mode()
    }

    pub fn update_mode(&mut self, theta: Float) -> Mode {
        self.selector.update(theta)
    }

    pub fn law(&self, mode: Mode) -> &ControlLaw {
        match mode {
            Mode::SwingUp => &self.swing_up,
            Mode::Stabilize => &self.stabilize,
        }
    }

    pub fn compute_control(&self, state: &CartPoleState) -> ControlOutput {
        let u = self.law(self.current_mode()).force(state);
        ControlOutput::from_force(u)
    }
}

impl Controller for SwingUpController {
    fn observe_angle(&mut self, theta: Float) {
        self.update_mode(theta);
    }

    fn control(&mut self, state: &CartPoleState) -> ControlOutput {
        self.compute_control(state)
    }

    fn mode(&self) -> Option<Mode> {
        Some(self.current_mode())
    }
}
