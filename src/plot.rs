use std::path::Path;

use itertools::izip;
use plotters::prelude::*;

use crate::{errors::SwingupError, simulate::Trajectory, types::Float};

/// Plot pole angle and cart position against time into a PNG.
pub fn plot_trajectory(trajectory: &Trajectory, dt: Float, path: &Path) -> Result<(), SwingupError> {
    if trajectory.is_empty() {
        return Err(SwingupError::Plot("empty trajectory".to_string()));
    }
    draw(trajectory, dt, path).map_err(|e| SwingupError::Plot(e.to_string()))
}

fn draw(
    trajectory: &Trajectory,
    dt: Float,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let final_time = trajectory.len() as Float * dt;
    let thetas: Vec<Float> = trajectory.states.iter().map(|s| s.theta()).collect();
    let xs: Vec<Float> = trajectory.states.iter().map(|s| s.x()).collect();

    // Determine y-axis limits based on the minimum and maximum values in the data
    let min_y = izip!(thetas.iter(), xs.iter())
        .map(|(t, x)| t.min(*x))
        .fold(Float::INFINITY, Float::min);
    let max_y = izip!(thetas.iter(), xs.iter())
        .map(|(t, x)| t.max(*x))
        .fold(Float::NEG_INFINITY, Float::max);
    let (min_y, max_y) = if max_y > min_y {
        (min_y, max_y)
    } else {
        (min_y - 1.0, max_y + 1.0)
    };

    let root = BitMapBackend::new(path, (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Cart-pole swing-up", ("sans-serif", 20))
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0.0..final_time, min_y..max_y)?;

    chart.configure_mesh().x_desc("t [s]").draw()?;

    chart
        .draw_series(LineSeries::new(
            thetas.iter().enumerate().map(|(i, v)| (i as Float * dt, *v)),
            &BLUE,
        ))?
        .label("theta [rad]")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .draw_series(LineSeries::new(
            xs.iter().enumerate().map(|(i, v)| (i as Float * dt, *v)),
            &RED,
        ))?
        .label("x [m]")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
