use egui::{
    Align2, CentralPanel, Color32, FontId, Painter, Pos2, RichText, Ui, Vec2, Visuals,
};
use egui_plot::{Legend, Line, Plot, PlotPoint, PlotPoints};

use super::chart::{StrategyChart, row_y};

const LABEL_GUTTER: f32 = 110.;
const LABEL_PADDING: f32 = 6.;
const LABEL_FONT_SIZE: f32 = 13.;
const OUTLINE_COLOR: Color32 = Color32::BLACK;

pub(crate) struct PitStrategyApp {
    chart: StrategyChart,
    stint_line_width: f32,
    label_outline_width: f32,
}

impl PitStrategyApp {
    pub(crate) fn new(
        chart: StrategyChart,
        stint_line_width: f32,
        label_outline_width: f32,
        cc: &eframe::CreationContext<'_>,
    ) -> Self {
        // Compound and team colors are picked for a light background
        cc.egui_ctx.set_visuals(Visuals::light());
        Self {
            chart,
            stint_line_width,
            label_outline_width,
        }
    }

    fn show_strategy_plot(&self, ui: &mut Ui) {
        let row_count = self.chart.rows.len();
        let plot = Plot::new("pit_strategies")
            .legend(Legend::default())
            .x_axis_label("Lap Number")
            .y_axis_label("Drivers (Finish Order)")
            // driver names are painted into the y axis gutter below
            .y_axis_min_width(LABEL_GUTTER)
            .y_axis_formatter(|_, _| String::new())
            .include_x(0.)
            .include_x(f64::from(self.chart.max_lap) + 1.)
            .include_y(row_y(0) + 0.5)
            .include_y(row_y(row_count) + 0.5);

        let plot_response = plot.show(ui, |plot_ui| {
            for (row_index, row) in self.chart.rows.iter().enumerate() {
                let y = row_y(row_index);
                for segment in &row.segments {
                    let points = PlotPoints::new(vec![
                        [f64::from(segment.start_lap), y],
                        [f64::from(segment.end_lap), y],
                    ]);
                    plot_ui.line(
                        Line::new(segment.compound.label(), points)
                            .color(segment.color)
                            .width(self.stint_line_width),
                    );
                }
            }
        });

        let transform = plot_response.transform;
        let frame = *transform.frame();
        let font = FontId::proportional(LABEL_FONT_SIZE);
        let painter = ui.painter();
        for (row_index, row) in self.chart.rows.iter().enumerate() {
            let row_pos = transform.position_from_point(&PlotPoint::new(0., row_y(row_index)));
            if row_pos.y < frame.top() || row_pos.y > frame.bottom() {
                continue;
            }
            paint_outlined_text(
                painter,
                Pos2::new(frame.left() - LABEL_PADDING, row_pos.y),
                &row.label,
                font.clone(),
                row.label_color,
                self.label_outline_width,
            );
        }
    }
}

impl eframe::App for PitStrategyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new(&self.chart.title).strong());
            });
            self.show_strategy_plot(ui);
        });
    }
}

/// Right-aligned text with a dark outline so team colors stay readable on any
/// background.
pub(crate) fn paint_outlined_text(
    painter: &Painter,
    pos: Pos2,
    text: &str,
    font: FontId,
    color: Color32,
    outline_width: f32,
) {
    if outline_width > 0. {
        for dx in [-outline_width, 0., outline_width] {
            for dy in [-outline_width, 0., outline_width] {
                if dx == 0. && dy == 0. {
                    continue;
                }
                painter.text(
                    pos + Vec2::new(dx, dy),
                    Align2::RIGHT_CENTER,
                    text,
                    font.clone(),
                    OUTLINE_COLOR,
                );
            }
        }
    }
    painter.text(pos, Align2::RIGHT_CENTER, text, font, color);
}
