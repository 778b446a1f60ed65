use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::core::domain::TelemetrySample;

/// Custom deserializer that accepts either a JSON bool or a 0/1 integer
/// for the `active` flag (the feed has served both encodings)
fn deserialize_active<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrInt {
        Bool(bool),
        Int(i64),
    }

    match BoolOrInt::deserialize(deserializer)? {
        BoolOrInt::Bool(b) => Ok(b),
        BoolOrInt::Int(0) => Ok(false),
        BoolOrInt::Int(1) => Ok(true),
        BoolOrInt::Int(other) => Err(D::Error::custom(format!(
            "active flag must be a bool or 0/1, got {}",
            other
        ))),
    }
}

/// Raw JSON structure for one record of the plasma (wind) product
#[derive(Debug, Deserialize)]
struct RawWindRecord {
    time_tag: String,
    #[serde(deserialize_with = "deserialize_active")]
    active: bool,
    proton_speed: Option<f64>,
}

/// Raw JSON structure for one record of the magnetometer product
#[derive(Debug, Deserialize)]
struct RawMagRecord {
    time_tag: String,
    #[serde(deserialize_with = "deserialize_active")]
    active: bool,
    bz_gsm: Option<f64>,
}

/// Parse a product time tag.
///
/// The feed has served `T`-separated timestamps with and without a zone
/// suffix as well as space-separated ones, so all three are accepted.
fn parse_time_tag(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }
    anyhow::bail!("Unrecognized time_tag '{}'", raw)
}

/// Parse the wind product JSON (proton speed in km/s), newest first.
pub fn parse_wind_json(json_str: &str) -> Result<Vec<TelemetrySample>> {
    let records: Vec<RawWindRecord> =
        serde_json::from_str(json_str).context("Failed to parse wind product JSON")?;

    let samples = records
        .into_iter()
        .map(|r| to_sample(&r.time_tag, r.active, r.proton_speed))
        .collect::<Result<Vec<_>>>()?;

    Ok(sort_newest_first(samples))
}

/// Parse the magnetometer product JSON (Bz GSM in nT), newest first.
pub fn parse_mag_json(json_str: &str) -> Result<Vec<TelemetrySample>> {
    let records: Vec<RawMagRecord> =
        serde_json::from_str(json_str).context("Failed to parse magnetometer product JSON")?;

    let samples = records
        .into_iter()
        .map(|r| to_sample(&r.time_tag, r.active, r.bz_gsm))
        .collect::<Result<Vec<_>>>()?;

    Ok(sort_newest_first(samples))
}

fn to_sample(raw_time_tag: &str, active: bool, value: Option<f64>) -> Result<TelemetrySample> {
    let time_tag = parse_time_tag(raw_time_tag)?;
    Ok(TelemetrySample {
        time_tag,
        active,
        value,
    })
}

// Wire order is not guaranteed, so the trailing window is defined here.
fn sort_newest_first(mut samples: Vec<TelemetrySample>) -> Vec<TelemetrySample> {
    samples.sort_by(|a, b| b.time_tag.cmp(&a.time_tag));
    samples
}
