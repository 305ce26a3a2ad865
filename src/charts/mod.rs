//! Chart rendering.
//!
//! The dispatcher hands aggregated expense data to a [`ChartRenderer`] and
//! gets back the path of a rendered PNG artifact. The plotters-backed
//! implementation lives in [`renderer`].

pub mod renderer;

use std::path::PathBuf;

use anyhow::Result;

use crate::domain::{CategoryTotal, DailyTotal, MonthlyTotal};

pub use renderer::PlottersChartRenderer;

/// Produces image artifacts from a user's aggregated expense data.
///
/// Implementations report "no data" as an error; the dispatcher surfaces
/// renderer errors verbatim in the reply.
pub trait ChartRenderer: Send + Sync {
    /// Pie chart of spending per category.
    fn render_category_breakdown(&self, owner: i64, totals: &[CategoryTotal]) -> Result<PathBuf>;

    /// Line chart of spending over time.
    fn render_time_series(&self, owner: i64, totals: &[DailyTotal]) -> Result<PathBuf>;

    /// Bar chart of totals per month.
    fn render_monthly_totals(&self, owner: i64, totals: &[MonthlyTotal]) -> Result<PathBuf>;
}
