// Data provider seam: anything that can load a session's roster and laps

use std::fmt;

use crate::errors::PitwallError;
use crate::strategy::SessionData;

pub mod cache;
pub mod openf1;

pub use cache::ResponseCache;
pub use openf1::OpenF1Provider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Race,
}

impl SessionKind {
    /// Session name as the provider spells it
    pub fn session_name(&self) -> &'static str {
        match self {
            SessionKind::Race => "Race",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.session_name())
    }
}

pub trait SessionProvider {
    /// Fully load one session. Any failure is fatal for the caller.
    fn fetch_session(
        &self,
        year: u16,
        round: u8,
        kind: SessionKind,
    ) -> Result<SessionData, PitwallError>;
}
