// Error types for pitwall

use snafu::Snafu;
use std::io;

use crate::provider::SessionKind;

#[derive(Debug, Snafu)]
pub enum PitwallError {
    // Race selection errors, recovered by the prompt loop
    #[snafu(display("Invalid race selection {input:?}: {reason}"))]
    InvalidSelection { input: String, reason: String },
    #[snafu(display("Standard input closed before a Grand Prix was selected"))]
    InputClosed,
    #[snafu(display("Error reading race selection"))]
    PromptIo { source: io::Error },

    // Data provider errors
    #[snafu(display("Error accessing the response cache"))]
    CacheIo { source: io::Error },
    #[snafu(display("Request to data provider failed"))]
    Http { source: reqwest::Error },
    #[snafu(display("Data provider returned {status} for {url}"))]
    HttpStatus { url: String, status: u16 },
    #[snafu(display("Could not decode data provider response"))]
    Decode { source: serde_json::Error },
    #[snafu(display("No {kind} session found for round {round} of {year}"))]
    SessionNotFound {
        year: u16,
        round: u8,
        kind: SessionKind,
    },

    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error reading or writing config file"))]
    ConfigIO { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerialize { source: serde_json::Error },

    // UI errors
    #[snafu(display("Could not open chart window: {description}"))]
    Ui { description: String },
}

impl From<reqwest::Error> for PitwallError {
    fn from(value: reqwest::Error) -> Self {
        PitwallError::Http { source: value }
    }
}
