pub mod catalog;
pub mod colors;
pub mod stint;
pub mod types;

pub use catalog::{GRAND_PRIX_NAMES, RaceSelection, SEASON, parse_selection, prompt_for_race};
pub use colors::{DEFAULT_COLOR, compound_color, team_color};
pub use stint::segment_stints;
pub use types::{Compound, DriverRecord, LapRecord, SessionData, Stint};
