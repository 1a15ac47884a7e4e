//! Blocking chart windows.
//!
//! Each chart opens one native window via `eframe::run_native`, which
//! returns only when the user closes the window. Series construction is kept
//! separate from rendering so it can be unit tested; the windows themselves
//! need a display.

use anyhow::{Result, anyhow};
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot, PlotPoints, Points};

/// One `[x, y]` scatter point per dataset row.
pub fn scatter_points(year_parts: &[(i64, i64)]) -> Vec<[f64; 2]> {
    year_parts
        .iter()
        .map(|&(year, parts)| [year as f64, parts as f64])
        .collect()
}

/// One `(x, height)` bar per year, in the order the counts arrive.
pub fn year_bars(counts: &[(i64, usize)]) -> Vec<(f64, f64)> {
    counts
        .iter()
        .map(|&(year, count)| (year as f64, count as f64))
        .collect()
}

enum Series {
    Scatter(Vec<[f64; 2]>),
    Bars(Vec<(f64, f64)>),
}

struct ChartWindow {
    title: String,
    x_label: String,
    y_label: String,
    series: Series,
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.title.as_str());
            Plot::new("chart")
                .x_axis_label(self.x_label.as_str())
                .y_axis_label(self.y_label.as_str())
                .show(ui, |plot_ui| match &self.series {
                    Series::Scatter(points) => {
                        let points = Points::new(PlotPoints::from(points.clone()))
                            .radius(2.0)
                            .color(egui::Color32::LIGHT_BLUE);
                        plot_ui.points(points);
                    }
                    Series::Bars(bars) => {
                        let bars = bars
                            .iter()
                            .map(|&(x, height)| Bar::new(x, height).width(0.8))
                            .collect();
                        plot_ui.bar_chart(BarChart::new(bars).color(egui::Color32::LIGHT_BLUE));
                    }
                });
        });
    }
}

pub fn show_scatter(title: &str, x_label: &str, y_label: &str, points: Vec<[f64; 2]>) -> Result<()> {
    show(ChartWindow {
        title: title.to_string(),
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        series: Series::Scatter(points),
    })
}

pub fn show_bars(title: &str, x_label: &str, y_label: &str, bars: Vec<(f64, f64)>) -> Result<()> {
    show(ChartWindow {
        title: title.to_string(),
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        series: Series::Bars(bars),
    })
}

// Blocks until the window is closed.
fn show(window: ChartWindow) -> Result<()> {
    let title = window.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(window))),
    )
    .map_err(|err| anyhow!("Rendering '{title}': {err}"))
}
