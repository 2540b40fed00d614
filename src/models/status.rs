use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::AppError;

/// Binary state of a controllable load, matching the wire literals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadState {
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
}

impl LoadState {
    pub fn is_on(self) -> bool {
        matches!(self, LoadState::On)
    }

    /// The opposite state, used when a toggle control is activated.
    pub fn flipped(self) -> Self {
        match self {
            LoadState::On => LoadState::Off,
            LoadState::Off => LoadState::On,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LoadState::On => "ON",
            LoadState::Off => "OFF",
        }
    }
}

impl std::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named load with its current state and measured power draw.
#[derive(Clone, Debug, PartialEq)]
pub struct Load {
    pub name: String,
    pub state: LoadState,
    pub power_watts: f64,
}

impl Load {
    /// Wattage rounded to the nearest whole watt for display.
    pub fn power_display(&self) -> i64 {
        self.power_watts.round() as i64
    }
}

/// Validated current-status payload. Replaces any prior copy wholesale on
/// each fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    loads: Vec<Load>,
    cost_per_hour: f64,
}

impl Snapshot {
    pub fn new(loads: Vec<Load>, cost_per_hour: f64) -> Self {
        Self {
            loads,
            cost_per_hour,
        }
    }

    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    pub fn cost_per_hour(&self) -> f64 {
        self.cost_per_hour
    }

    /// Current hourly cost formatted to exactly two decimals.
    pub fn cost_display(&self) -> String {
        format!("{:.2}", self.cost_per_hour)
    }

    /// Rewrites the state of the named load in place. Unknown names are a
    /// no-op; the caller holds the authoritative load list.
    pub fn set_state(&mut self, name: &str, state: LoadState) {
        if let Some(load) = self.loads.iter_mut().find(|l| l.name == name) {
            load.state = state;
        }
    }
}

// WIRE SHAPES
/// Raw `/api/status` payload. The `power` map keys loads as `<name>_Power`;
/// alignment with the `status` map is validated during conversion rather
/// than assumed.
#[derive(Deserialize, Debug)]
pub struct StatusResponse {
    pub status: HashMap<String, LoadState>,
    pub power: HashMap<String, f64>,
    pub cost: f64,
}

impl TryFrom<StatusResponse> for Snapshot {
    type Error = AppError;

    fn try_from(raw: StatusResponse) -> Result<Self, Self::Error> {
        // Wire maps carry no ordering guarantee; sort by name so the
        // rendered card order is stable across fetches.
        let mut names: Vec<&String> = raw.status.keys().collect();
        names.sort();

        let mut loads = Vec::with_capacity(names.len());
        for name in names {
            let power = raw
                .power
                .get(&format!("{name}_Power"))
                .copied()
                .ok_or_else(|| {
                    AppError::DataError(format!("Missing power reading for load {name}"))
                })?;

            loads.push(Load {
                name: name.clone(),
                state: raw.status[name],
                power_watts: power,
            });
        }

        Ok(Snapshot::new(loads, raw.cost))
    }
}

/// Body of `POST /api/toggle`. The response body is not consumed.
#[derive(Serialize, Debug)]
pub struct ToggleRequest {
    pub load: String,
    pub status: LoadState,
}
