//! Presentation of a finished run.
//!
//! [`render`] turns recorded metrics and the final robot into a [`Report`] with two
//! charts: fitness per generation and distance to target per generation. Charts
//! are indexed by the number of recorded samples, which is shorter than the
//! configured generation count whenever a run stalls.

use crate::models::{Metrics, Position, Robot, Vector2};
use serde::Serialize;
use std::fmt::{self, Write as _};
use std::path::Path;
use tracing::instrument;

const CHART_HEIGHT: usize = 10;
const CHART_WIDTH: usize = 60;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Could not serialize report: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Could not write report: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// `(generation, value)` pairs, one per recorded generation.
    pub points: Vec<(usize, f64)>,
}

impl Chart {
    fn new(title: &str, x_label: &str, y_label: String, values: &[f64]) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label,
            points: values.iter().copied().enumerate().collect(),
        }
    }

    /// Draws the chart as text, downsampling to at most `width` columns.
    pub fn draw(&self, width: usize, height: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);

        if self.points.is_empty() || width == 0 || height == 0 {
            let _ = writeln!(out, "  (no generations recorded)");
            return out;
        }

        let (min, max) = self
            .points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, v)| {
                (lo.min(v), hi.max(v))
            });
        let span = if max > min { max - min } else { 1.0 };

        let columns = self.points.len().min(width);
        let mut grid = vec![vec![' '; columns]; height];
        for (column, cell) in (0..columns).map(|c| (c, c * self.points.len() / columns)) {
            let value = self.points[cell].1;
            let level = (((value - min) / span) * (height - 1) as f64).round() as usize;
            grid[height - 1 - level.min(height - 1)][column] = '*';
        }

        let label_width = format!("{max:.3}").len().max(format!("{min:.3}").len());
        for (row, line) in grid.iter().enumerate() {
            let label = match row {
                0 => format!("{max:.3}"),
                r if r == height - 1 => format!("{min:.3}"),
                _ => String::new(),
            };
            let line: String = line.iter().collect();
            let _ = writeln!(out, "{label:>label_width$} |{}", line.trim_end());
        }

        let _ = writeln!(
            out,
            "{:>label_width$} +{}",
            "",
            "-".repeat(columns)
        );
        let _ = writeln!(
            out,
            "{:>label_width$}  {} 0..{} | {}",
            "",
            self.x_label,
            self.points.len() - 1,
            self.y_label
        );

        out
    }
}

/// Both charts of a run plus its annotations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub fitness: Chart,
    pub convergence: Chart,
    /// Generation with the highest recorded fitness.
    pub peak_generation: Option<usize>,
    /// `(target.x - position.x, position.y - target.y)`.
    pub positioning_error: Vector2,
    pub final_position: Position,
    pub target_position: Position,
}

/// Builds the report for a finished run.
#[instrument(level = "debug", skip(metrics, robot), fields(recorded = metrics.len()))]
pub fn render(metrics: &Metrics, robot: &Robot) -> Report {
    let target = robot.target_position();
    let position = robot.position();

    Report {
        fitness: Chart::new(
            "Fitness dynamics",
            "Generation",
            "Fitness value".to_string(),
            metrics.fitness(),
        ),
        convergence: Chart::new(
            "Convergence dynamics",
            "Generation",
            format!("Deviation from the target position ({},{})", target.x, target.y),
            metrics.convergence(),
        ),
        peak_generation: metrics.peak_generation(),
        positioning_error: Vector2::new(target.x - position.x, position.y - target.y),
        final_position: position,
        target_position: target,
    }
}

impl Report {
    pub fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &Path) -> Result<(), RenderError> {
        std::fs::write(path, self.to_json()?)?;

        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fitness.draw(CHART_WIDTH, CHART_HEIGHT))?;
        match self.peak_generation {
            Some(generation) => {
                writeln!(f, "The maximum fitness yields in the generation #{generation}")?
            }
            None => writeln!(f, "No fitness recorded")?,
        }
        writeln!(f)?;
        write!(f, "{}", self.convergence.draw(CHART_WIDTH, CHART_HEIGHT))?;
        writeln!(
            f,
            "Final positioning error: ({:.2}, {:.2})",
            self.positioning_error.x, self.positioning_error.y
        )
    }
}
