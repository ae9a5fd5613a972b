use std::fs;
use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::errors::SimulationError;
use crate::trajectory_system::kinematics::Trajectory;

pub const DEFAULT_SIZE: (u32, u32) = (1500, 1000);

/// Render acceleration, velocity and altitude against time as three stacked
/// line charts sharing the time axis. Axis text is drawn when a system
/// sans-serif font can be loaded; otherwise the charts are drawn bare.
pub fn render_png(
    trajectory: &Trajectory,
    path: &Path,
    size: (u32, u32),
) -> Result<(), SimulationError> {
    render(trajectory, path, size, label_font_available())
}

/// Whether the default label font resolves on this machine.
pub fn label_font_available() -> bool {
    FontDesc::new(FontFamily::SansSerif, 12.0, FontStyle::Normal)
        .box_size("0")
        .is_ok()
}

fn render(
    trajectory: &Trajectory,
    path: &Path,
    size: (u32, u32),
    labelled: bool,
) -> Result<(), SimulationError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let panels = root.split_evenly((3, 1));
    let charts = [
        ("acceleration (m/s^2)", trajectory.acceleration_series(), RED),
        ("velocity (m/s)", trajectory.velocity_series(), BLUE),
        ("altitude (m)", trajectory.altitude_series(), GREEN),
    ];

    for (area, (y_desc, series, color)) in panels.iter().zip(charts.iter()) {
        draw_panel(area, y_desc, series, color, labelled)?;
    }

    root.present().map_err(plot_error)?;
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    y_desc: &str,
    series: &[(f64, f64)],
    color: &RGBColor,
    labelled: bool,
) -> Result<(), SimulationError> {
    let (x_range, y_range) = axis_ranges(series);

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range, y_range)
        .map_err(plot_error)?;

    let mut mesh = chart.configure_mesh();
    if labelled {
        mesh.x_desc("time (s)").y_desc(y_desc);
    } else {
        mesh.x_labels(0).y_labels(0);
    }
    mesh.draw().map_err(plot_error)?;

    chart
        .draw_series(LineSeries::new(series.iter().copied(), color))
        .map_err(plot_error)?;

    Ok(())
}

/// Bounds covering every point. A flat or empty series still gets a
/// non-degenerate range.
pub fn axis_ranges(series: &[(f64, f64)]) -> (Range<f64>, Range<f64>) {
    if series.is_empty() {
        return (0.0..1.0, 0.0..1.0);
    }

    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(x, y) in series {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    (widen(x_min, x_max), widen(y_min, y_max))
}

fn widen(min: f64, max: f64) -> Range<f64> {
    if max > min {
        min..max
    } else {
        (min - 1.0)..(max + 1.0)
    }
}

fn plot_error<E: std::fmt::Display>(err: E) -> SimulationError {
    SimulationError::Export(err.to_string())
}
