// Grand Prix catalog and interactive race selection

use std::io::{BufRead, Write};

use log::debug;

use crate::errors::PitwallError;

pub const SEASON: u16 = 2025;

/// Rounds of the season that have a race available, in calendar order.
pub const GRAND_PRIX_NAMES: [&str; 14] = [
    "Australian Grand Prix",
    "Chinese Grand Prix",
    "Japanese Grand Prix",
    "Bahrain Grand Prix",
    "Saudi Arabian Grand Prix",
    "Miami Grand Prix",
    "Emilia Romagna Grand Prix",
    "Monaco Grand Prix",
    "Spanish Grand Prix",
    "Canadian Grand Prix",
    "Austrian Grand Prix",
    "British Grand Prix",
    "Belgian Grand Prix",
    "Hungarian Grand Prix",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceSelection {
    pub season: u16,
    pub round: u8,
    pub name: &'static str,
}

impl RaceSelection {
    pub fn from_round(round: u8) -> Option<Self> {
        let index = usize::from(round).checked_sub(1)?;
        GRAND_PRIX_NAMES.get(index).map(|&name| Self {
            season: SEASON,
            round,
            name,
        })
    }
}

pub fn prompt_text() -> String {
    format!(
        "Choose a Grand Prix from the {} (1-{}): ",
        SEASON,
        GRAND_PRIX_NAMES.len()
    )
}

/// Parses one line of user input into a catalog entry.
pub fn parse_selection(input: &str) -> Result<RaceSelection, PitwallError> {
    let trimmed = input.trim();
    let number: i64 = trimmed
        .parse()
        .map_err(|_| PitwallError::InvalidSelection {
            input: trimmed.to_string(),
            reason: "Error: Please enter a valid number.".to_string(),
        })?;

    u8::try_from(number)
        .ok()
        .and_then(RaceSelection::from_round)
        .ok_or_else(|| PitwallError::InvalidSelection {
            input: trimmed.to_string(),
            reason: format!(
                "Error: Please enter a number between 1 and {}.",
                GRAND_PRIX_NAMES.len()
            ),
        })
}

/// Prompts until a valid race is entered. There is no retry limit; only a
/// closed input stream ends the loop without a selection.
pub fn prompt_for_race<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<RaceSelection, PitwallError> {
    loop {
        write!(output, "{}", prompt_text()).map_err(|e| PitwallError::PromptIo { source: e })?;
        output
            .flush()
            .map_err(|e| PitwallError::PromptIo { source: e })?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|e| PitwallError::PromptIo { source: e })?;
        if read == 0 {
            return Err(PitwallError::InputClosed);
        }

        match parse_selection(&line) {
            Ok(selection) => return Ok(selection),
            Err(PitwallError::InvalidSelection { input, reason }) => {
                debug!("Rejected race selection {:?}", input);
                writeln!(output, "{}", reason)
                    .map_err(|e| PitwallError::PromptIo { source: e })?;
            }
            Err(e) => return Err(e),
        }
    }
}
