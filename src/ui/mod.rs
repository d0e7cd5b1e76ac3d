use egui::Vec2;
use log::info;

use crate::{config::AppConfig, errors::PitwallError};

mod app;
pub mod chart;

use app::PitStrategyApp;
pub use chart::{ChartRow, StintSegment, StrategyChart, row_y};

/// Opens the chart window and blocks until it is closed.
pub fn show_strategy_chart(chart: StrategyChart, config: &AppConfig) -> Result<(), PitwallError> {
    info!(
        "Drawing {} stints for {} drivers",
        chart.segment_count(),
        chart.rows.len()
    );

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_title(chart.title.clone())
        .with_inner_size(Vec2::new(config.window_width, config.window_height));

    let stint_line_width = config.stint_line_width;
    let label_outline_width = config.label_outline_width;
    eframe::run_native(
        "Pitwall",
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(PitStrategyApp::new(
                chart,
                stint_line_width,
                label_outline_width,
                cc,
            )))
        }),
    )
    .map_err(|e| PitwallError::Ui {
        description: e.to_string(),
    })
}
