use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// One cost sample from `/api/history`. Extra fields in the payload (per-load
/// power and status columns) are accepted and ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HistoryEntry {
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub cost: f64,
}

/// Accepts RFC 3339 timestamps as well as the offset-less
/// `datetime.isoformat()` form the backend emits, which is read as UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;

    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f").map(|naive| naive.and_utc())
        })
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {s:?}: {e}")))
}

/// Ordered cost history, plotted exactly as received.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct History {
    data: Vec<HistoryEntry>,
}

impl History {
    pub fn new(data: Vec<HistoryEntry>) -> Self {
        Self { data }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Chart series in received order: full date-time labels on x (the axis
    /// trims them to hour:minute, hover tooltips show them whole), cost on
    /// y. No sorting, aggregation, or gap-filling.
    pub fn series_data(&self) -> (Vec<String>, Vec<f64>) {
        let x_data: Vec<String> = self
            .data
            .iter()
            .map(|e| e.timestamp.format("%Y-%m-%d %H:%M").to_string())
            .collect();

        let y_data: Vec<f64> = self.data.iter().map(|e| e.cost).collect();

        (x_data, y_data)
    }
}
