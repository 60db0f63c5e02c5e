use anyhow::{Context, Result};
use cartpole_swingup::{config::SimConfig, plot::plot_trajectory, simulate::run};

/// Swing a cart-pole up from hanging and balance it
///
///              θ = 0
///              |
///              |
///          ____|____
///         |_________|  ---> x
///
/// Physical constants default to m_c = 2, m_p = 0.1, l = 0.25, g = 9.81.
/// Set SWINGUP_CONFIG to a JSON file to override them. Logs go to stderr;
/// stdout carries only the summary line.
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env().context("failed to load configuration")?;
    let report = run(&config)?;

    if let Some(path) = &config.plot_path {
        plot_trajectory(&report.trajectory, config.env.tau, path)
            .with_context(|| format!("failed to plot to {}", path.display()))?;
        tracing::info!("trajectory plotted to {}", path.display());
    }

    println!("{}", report.summary_line());
    Ok(())
}
