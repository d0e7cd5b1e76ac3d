// OpenF1 (https://openf1.org) implementation of the session provider

use std::collections::HashMap;

use itertools::Itertools;
use log::{debug, info, warn};
use reqwest::Url;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::{ResponseCache, SessionKind, SessionProvider};
use crate::config::AppConfig;
use crate::errors::PitwallError;
use crate::strategy::{Compound, DriverRecord, LapRecord, SessionData};

const UNKNOWN_COMPOUND: &str = "UNKNOWN";

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct SessionEntry {
    pub(crate) session_key: u32,
    pub(crate) date_start: String,
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct DriverEntry {
    pub(crate) driver_number: u32,
    pub(crate) name_acronym: String,
    #[serde(default)]
    pub(crate) last_name: Option<String>,
    #[serde(default)]
    pub(crate) team_name: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct ResultEntry {
    pub(crate) driver_number: u32,
    #[serde(default)]
    pub(crate) position: Option<u32>,
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct LapEntry {
    pub(crate) driver_number: u32,
    pub(crate) lap_number: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct StintEntry {
    pub(crate) driver_number: u32,
    #[serde(default)]
    pub(crate) compound: Option<String>,
    #[serde(default)]
    pub(crate) lap_start: Option<u32>,
    #[serde(default)]
    pub(crate) lap_end: Option<u32>,
}

impl StintEntry {
    fn covers(&self, driver_number: u32, lap_number: u32) -> bool {
        match (self.lap_start, self.lap_end) {
            (Some(start), Some(end)) => {
                self.driver_number == driver_number && (start..=end).contains(&lap_number)
            }
            _ => false,
        }
    }
}

pub struct OpenF1Provider {
    client: Client,
    base_url: String,
    cache: ResponseCache,
}

impl OpenF1Provider {
    pub fn new(base_url: &str, cache: ResponseCache) -> Result<Self, PitwallError> {
        let client = Client::builder()
            .user_agent(concat!("pitwall/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, PitwallError> {
        let cache = ResponseCache::enable(&config.cache_dir)?;
        Self::new(&config.api_base_url, cache)
    }

    pub(crate) fn endpoint_url(&self, endpoint: &str, query: &[(&str, String)]) -> String {
        let base = format!("{}/{}", self.base_url, endpoint);
        match Url::parse_with_params(&base, query) {
            Ok(url) => url.to_string(),
            Err(e) => {
                debug!("Could not build URL for {}: {}", base, e);
                base
            }
        }
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, PitwallError> {
        let url = self.endpoint_url(endpoint, query);
        let body = match self.cache.get(&url)? {
            Some(body) => body,
            None => {
                debug!("GET {}", url);
                let response = self.client.get(&url).send()?;
                let status = response.status();
                if !status.is_success() {
                    return Err(PitwallError::HttpStatus {
                        url,
                        status: status.as_u16(),
                    });
                }
                let body = response.text()?;
                self.cache.put(&url, &body)?;
                body
            }
        };
        serde_json::from_str(&body).map_err(|e| PitwallError::Decode { source: e })
    }

    fn resolve_session_key(
        &self,
        year: u16,
        round: u8,
        kind: SessionKind,
    ) -> Result<u32, PitwallError> {
        let sessions: Vec<SessionEntry> = self.get_json(
            "sessions",
            &[
                ("year", year.to_string()),
                ("session_name", kind.session_name().to_string()),
            ],
        )?;
        pick_session(sessions, round).ok_or(PitwallError::SessionNotFound { year, round, kind })
    }
}

impl SessionProvider for OpenF1Provider {
    fn fetch_session(
        &self,
        year: u16,
        round: u8,
        kind: SessionKind,
    ) -> Result<SessionData, PitwallError> {
        let session_key = self.resolve_session_key(year, round, kind)?;
        info!(
            "Loading {} {} round {} (session key {})",
            year, kind, round, session_key
        );

        let query = [("session_key", session_key.to_string())];
        let drivers: Vec<DriverEntry> = self.get_json("drivers", &query)?;
        let results: Vec<ResultEntry> = self.get_json("session_result", &query)?;
        let laps: Vec<LapEntry> = self.get_json("laps", &query)?;
        let stints: Vec<StintEntry> = self.get_json("stints", &query)?;

        let session = assemble_session(drivers, results, laps, stints);
        info!(
            "Loaded {} drivers and {} laps",
            session.finish_order.len(),
            session.laps.len()
        );
        Ok(session)
    }
}

/// Sessions of one name in a season, in calendar order, indexed by round.
pub(crate) fn pick_session(sessions: Vec<SessionEntry>, round: u8) -> Option<u32> {
    let index = usize::from(round).checked_sub(1)?;
    sessions
        .into_iter()
        .sorted_by(|a, b| a.date_start.cmp(&b.date_start))
        .nth(index)
        .map(|s| s.session_key)
}

/// Joins the provider tables into a roster sorted by finishing position and a
/// per-lap compound table.
pub(crate) fn assemble_session(
    drivers: Vec<DriverEntry>,
    results: Vec<ResultEntry>,
    laps: Vec<LapEntry>,
    stints: Vec<StintEntry>,
) -> SessionData {
    let roster: HashMap<u32, DriverRecord> = drivers
        .into_iter()
        .map(|d| {
            (
                d.driver_number,
                DriverRecord {
                    code: d.name_acronym,
                    number: d.driver_number,
                    last_name: d.last_name.unwrap_or_default(),
                    team_name: d.team_name.unwrap_or_default(),
                },
            )
        })
        .collect();

    // Unclassified drivers go last, keeping the provider's order
    let mut finish_order: Vec<DriverRecord> = Vec::new();
    for result in results
        .iter()
        .sorted_by_key(|r| (r.position.is_none(), r.position))
    {
        match roster.get(&result.driver_number) {
            Some(driver) if !finish_order.iter().any(|d| d.number == driver.number) => {
                finish_order.push(driver.clone())
            }
            Some(_) => {}
            None => warn!(
                "Result for car #{} has no matching driver",
                result.driver_number
            ),
        }
    }
    for driver in roster.values().sorted_by_key(|d| d.number) {
        if !finish_order.iter().any(|d| d.number == driver.number) {
            debug!("{} has no classified result", driver.code);
            finish_order.push(driver.clone());
        }
    }

    let laps = laps
        .into_iter()
        .filter_map(|lap| {
            let Some(driver) = roster.get(&lap.driver_number) else {
                warn!(
                    "Lap {} for car #{} has no matching driver",
                    lap.lap_number, lap.driver_number
                );
                return None;
            };
            let compound = stints
                .iter()
                .rev()
                .find(|s| s.covers(lap.driver_number, lap.lap_number))
                .and_then(|s| s.compound.as_deref())
                .unwrap_or(UNKNOWN_COMPOUND);
            Some(LapRecord {
                driver_code: driver.code.clone(),
                lap_number: lap.lap_number,
                compound: Compound::from(compound),
            })
        })
        .sorted_by(|a, b| {
            a.driver_code
                .cmp(&b.driver_code)
                .then(a.lap_number.cmp(&b.lap_number))
        })
        .collect();

    SessionData {
        finish_order,
        laps,
    }
}
