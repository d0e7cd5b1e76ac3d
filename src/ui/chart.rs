use egui::Color32;
use itertools::Itertools;
use log::debug;

use crate::strategy::{Compound, SessionData, compound_color, segment_stints, team_color};

/// One stint as it is drawn: a horizontal bar from `start_lap` to `end_lap`.
#[derive(Debug, Clone, PartialEq)]
pub struct StintSegment {
    pub compound: Compound,
    pub start_lap: u32,
    pub end_lap: u32,
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub driver_code: String,
    pub label: String,
    pub label_color: Color32,
    pub segments: Vec<StintSegment>,
}

/// Everything needed to draw the strategy timeline, independent of the window.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyChart {
    pub title: String,
    /// Rows in finishing order, winner first
    pub rows: Vec<ChartRow>,
    pub max_lap: u32,
}

/// Plot height of a row. Rows grow downwards so the winner sits on top.
pub fn row_y(row_index: usize) -> f64 {
    -(row_index as f64)
}

impl StrategyChart {
    pub fn build(session: &SessionData, grand_prix_name: &str) -> Self {
        let rows = session
            .finish_order
            .iter()
            .map(|driver| {
                let stints = segment_stints(session.laps_for(&driver.code));
                if stints.is_empty() {
                    debug!("{} has no laps, row left empty", driver.code);
                } else {
                    debug!(
                        "{}: {}",
                        driver.code,
                        stints
                            .iter()
                            .map(|s| format!("{} x{}", s.compound, s.lap_count()))
                            .join(", ")
                    );
                }
                ChartRow {
                    driver_code: driver.code.clone(),
                    label: driver.last_name.clone(),
                    label_color: team_color(&driver.team_name),
                    segments: stints
                        .into_iter()
                        .map(|stint| StintSegment {
                            color: compound_color(&stint.compound),
                            compound: stint.compound,
                            start_lap: stint.start_lap,
                            end_lap: stint.end_lap,
                        })
                        .collect(),
                }
            })
            .collect();

        Self {
            title: format!("Pit Strategies by Driver ({})", grand_prix_name),
            rows,
            max_lap: session.max_lap(),
        }
    }

    pub fn segment_count(&self) -> usize {
        self.rows.iter().map(|r| r.segments.len()).sum()
    }
}
