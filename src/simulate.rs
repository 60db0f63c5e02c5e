use crate::{
    cart_pole::CartPoleEnv,
    config::SimConfig,
    control::{mode::Mode, Controller, SwingUpController},
    env::Environment,
    errors::SwingupError,
    state::CartPoleState,
    types::Float,
};

/// Observations fed to the controller and the signed force it applied
#[derive(Clone, Debug, Default)]
pub struct Trajectory {
    pub states: Vec<CartPoleState>,
    pub forces: Vec<Float>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[derive(Debug)]
pub struct RunReport {
    /// Iterations run, counting the one that terminated the episode
    pub iterations: usize,
    pub terminated: bool,
    pub final_mode: Option<Mode>,
    /// Iteration (1-based) at which the controller latched to stabilization
    pub switched_at: Option<usize>,
    pub trajectory: Trajectory,
}

impl RunReport {
    /// The single line the binary reports on stdout
    pub fn summary_line(&self) -> String {
        if self.terminated {
            format!("Terminated after {} iterations.", self.iterations)
        } else {
            format!(
                "Completed {} iterations without termination.",
                self.iterations
            )
        }
    }
}

/// Drive the environment with the controller for up to max_iterations.
///
/// The environment is reset, and the reset observation is what the controller
/// sees first; `initial_state`, if given, then overwrites the internal state.
/// Each iteration the controller observes the environment's internal angle
/// (for mode switching) and then computes a control from the latest
/// observation.
pub fn run_episode<E: Environment, C: Controller>(
    env: &mut E,
    controller: &mut C,
    initial_state: Option<CartPoleState>,
    max_iterations: usize,
) -> RunReport {
    let mut observation = env.reset();
    if let Some(state) = initial_state {
        env.set_state(state);
    }

    let mut trajectory = Trajectory::default();
    let mut switched_at = None;
    let mut iterations = 0;
    let mut terminated = false;

    for i in 0..max_iterations {
        let before = controller.mode();
        controller.observe_angle(env.internal_state().theta());
        if before != Some(Mode::Stabilize) && controller.mode() == Some(Mode::Stabilize) {
            switched_at = Some(i + 1);
        }

        let output = controller.control(&observation);
        env.set_force_mag(output.magnitude);
        let result = env.step(output.direction);
        tracing::trace!(
            iteration = i + 1,
            action = output.direction.action(),
            force = output.signed_force(),
            theta = result.observation.theta(),
            x = result.observation.x(),
            "step"
        );

        trajectory.states.push(observation);
        trajectory.forces.push(output.signed_force());
        observation = result.observation;
        iterations = i + 1;

        if result.done {
            terminated = true;
            break;
        }
    }

    RunReport {
        iterations,
        terminated,
        final_mode: controller.mode(),
        switched_at,
        trajectory,
    }
}

/// Build the cart-pole and swing-up controller from the config and run them.
pub fn run(config: &SimConfig) -> Result<RunReport, SwingupError> {
    config.validate()?;

    let mut env = CartPoleEnv::with_params(&config.env, &config.physical);
    let mut controller = SwingUpController::new(config.physical);
    tracing::info!(
        mass_cart = config.physical.mass_cart,
        mass_pole = config.physical.mass_pole,
        length = config.physical.length,
        max_iterations = config.max_iterations,
        "starting swing-up"
    );

    let report = run_episode(
        &mut env,
        &mut controller,
        Some(config.initial_state()),
        config.max_iterations,
    );
    tracing::info!(
        iterations = report.iterations,
        terminated = report.terminated,
        switched_at = ?report.switched_at,
        "run finished"
    );
    Ok(report)
}
