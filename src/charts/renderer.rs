//! Plotters-backed chart renderer producing PNG files.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use chrono::Duration;
use plotters::prelude::*;

use crate::charts::ChartRenderer;
use crate::domain::{CategoryTotal, DailyTotal, MonthlyTotal};

/// Cycled for pie slices and bars.
const PALETTE: [RGBColor; 8] = [
    RGBColor(66, 133, 244),
    RGBColor(219, 68, 55),
    RGBColor(244, 180, 0),
    RGBColor(15, 157, 88),
    RGBColor(171, 71, 188),
    RGBColor(0, 172, 193),
    RGBColor(255, 112, 67),
    RGBColor(158, 157, 36),
];

/// Renders charts into a configured output directory, one file per owner
/// and mode (re-rendering overwrites the previous artifact).
#[derive(Clone)]
pub struct PlottersChartRenderer {
    out_dir: PathBuf,
}

impl PlottersChartRenderer {
    pub fn new(out_dir: impl AsRef<Path>) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
        }
    }

    fn output_path(&self, file_name: &str) -> PathBuf {
        self.out_dir.join(file_name)
    }
}

impl ChartRenderer for PlottersChartRenderer {
    fn render_category_breakdown(&self, owner: i64, totals: &[CategoryTotal]) -> Result<PathBuf> {
        if totals.is_empty() {
            bail!("Nenhum dado encontrado para gráfico de pizza");
        }
        let path = self.output_path(&format!("gastos_categoria_{}.png", owner));

        let root = BitMapBackend::new(&path, (512, 512)).into_drawing_area();
        root.fill(&WHITE)?;

        let sizes: Vec<f64> = totals.iter().map(|t| t.total).collect();
        let labels: Vec<String> = totals
            .iter()
            .map(|t| format!("{} (R${:.2})", t.category, t.total))
            .collect();
        let colors: Vec<RGBColor> = (0..totals.len())
            .map(|i| PALETTE[i % PALETTE.len()])
            .collect();

        let center = (256, 256);
        let radius = 180.0;
        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.label_style(("sans-serif", 16).into_font().color(&BLACK));
        root.draw(&pie)?;

        root.present()?;
        Ok(path.clone())
    }

    fn render_time_series(&self, owner: i64, totals: &[DailyTotal]) -> Result<PathBuf> {
        if totals.is_empty() {
            bail!("Nenhum dado encontrado para gráfico de linha");
        }
        let path = self.output_path(&format!("evolucao_gastos_{}.png", owner));

        let root = BitMapBackend::new(&path, (800, 400)).into_drawing_area();
        root.fill(&WHITE)?;

        let start = totals[0].date;
        // keep the x range non-degenerate when there is a single data point
        let end = totals[totals.len() - 1].date.max(start + Duration::days(1));
        let max = totals.iter().map(|t| t.total).fold(0.0_f64, f64::max);
        let y_max = if max > 0.0 { max * 1.1 } else { 1.0 };

        let mut chart = ChartBuilder::on(&root)
            .caption("Gastos ao longo do tempo", ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(start..end, 0.0..y_max)?;

        chart
            .configure_mesh()
            .x_label_formatter(&|d| d.format("%d-%m-%Y").to_string())
            .y_label_formatter(&|v| format!("R${:.0}", v))
            .y_desc("Valor (R$)")
            .x_desc("Data")
            .draw()?;

        chart.draw_series(LineSeries::new(
            totals.iter().map(|t| (t.date, t.total)),
            PALETTE[0].stroke_width(2),
        ))?;
        chart.draw_series(
            totals
                .iter()
                .map(|t| Circle::new((t.date, t.total), 3, PALETTE[0].filled())),
        )?;

        root.present()?;
        Ok(path.clone())
    }

    fn render_monthly_totals(&self, owner: i64, totals: &[MonthlyTotal]) -> Result<PathBuf> {
        if totals.is_empty() {
            bail!("Nenhum dado encontrado para gráfico de barras");
        }
        let path = self.output_path(&format!("gastos_mes_{}.png", owner));

        let root = BitMapBackend::new(&path, (800, 500)).into_drawing_area();
        root.fill(&WHITE)?;

        let max = totals.iter().map(|t| t.total).fold(0.0_f64, f64::max);
        let y_max = if max > 0.0 { max * 1.1 } else { 1.0 };

        let mut chart = ChartBuilder::on(&root)
            .caption("Total de gastos por mês", ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d((0..totals.len() as u32).into_segmented(), 0.0..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_label_formatter(&|seg| match seg {
                SegmentValue::CenterOf(i) => totals
                    .get(*i as usize)
                    .map(|t| t.month.clone())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .y_label_formatter(&|v| format!("R${:.0}", v))
            .y_desc("Gastos em R$")
            .draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .style(PALETTE[0].filled())
                .margin(20)
                .data(totals.iter().enumerate().map(|(i, t)| (i as u32, t.total))),
        )?;

        root.present()?;
        Ok(path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_data_is_an_error_for_every_mode() {
        let renderer = PlottersChartRenderer::new(std::env::temp_dir());

        let err = renderer
            .render_category_breakdown(1, &[])
            .expect_err("empty pie");
        assert!(err.to_string().contains("Nenhum dado"));

        let err = renderer.render_time_series(1, &[]).expect_err("empty line");
        assert!(err.to_string().contains("Nenhum dado"));

        let err = renderer
            .render_monthly_totals(1, &[])
            .expect_err("empty bars");
        assert!(err.to_string().contains("Nenhum dado"));
    }

    #[test]
    fn output_paths_are_scoped_per_owner() {
        let renderer = PlottersChartRenderer::new("/tmp/charts");
        assert_eq!(
            renderer.output_path("gastos_categoria_7.png"),
            PathBuf::from("/tmp/charts/gastos_categoria_7.png")
        );
    }
}
