use std::{fs, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{check_positive, SwingupError},
    integrators::Integrator,
    params::PhysicalParams,
    state::CartPoleState,
    types::Float,
    PI,
};

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "SWINGUP_CONFIG";

/// Settings of the simulated cart-pole environment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Cart position beyond which the episode ends
    pub x_threshold: Float,
    /// Pole angle beyond which the episode ends. Set high enough that only
    /// the cart bound and the step limit end an episode.
    pub theta_threshold: Float,
    pub max_episode_steps: usize,
    /// Integration time step in seconds
    pub tau: Float,
    /// Gravity used by the simulation, separate from the controller's constant
    pub gravity: Float,
    pub integrator: Integrator,
    pub seed: u64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        EnvConfig {
            x_threshold: 2.4,
            theta_threshold: 100.0,
            max_episode_steps: 10_000,
            tau: 0.02,
            gravity: 9.8,
            integrator: Integrator::Euler,
            seed: 1,
        }
    }
}

/// Everything a swing-up run needs. Every field is optional in the JSON form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub physical: PhysicalParams,
    pub env: EnvConfig,
    pub max_iterations: usize,
    /// [x, x_dot, theta, theta_dot] written into the environment after reset
    pub initial_state: [Float; 4],
    /// Where to write a PNG of the trajectory, if anywhere
    pub plot_path: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            physical: PhysicalParams::default(),
            env: EnvConfig::default(),
            max_iterations: 10_000,
            initial_state: [0., 0., PI, 0.],
            plot_path: None,
        }
    }
}

impl SimConfig {
    pub fn from_json_str(json: &str) -> Result<Self, SwingupError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, SwingupError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load from the file named by `SWINGUP_CONFIG`, or fall back to defaults.
    pub fn from_env() -> Result<Self, SwingupError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                tracing::info!("loading config from {:?}", path);
                Self::from_file(Path::new(&path))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn initial_state(&self) -> CartPoleState {
        CartPoleState::from(self.initial_state)
    }

    pub fn validate(&self) -> Result<(), SwingupError> {
        self.physical.validate()?;
        check_positive("env.x_threshold", self.env.x_threshold)?;
        check_positive("env.theta_threshold", self.env.theta_threshold)?;
        check_positive("env.tau", self.env.tau)?;
        check_positive("env.gravity", self.env.gravity)?;
        if self.max_iterations == 0 || self.env.max_episode_steps == 0 {
            return Err(SwingupError::ZeroIterations);
        }
        Ok(())
    }
}
