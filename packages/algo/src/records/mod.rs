//! Skill Record Set
//!
//! Parses the skill data file format:
//!
//! ```json
//! { "Python": { "last_practice": "2024-01-15", "decay_rate": 0.05 } }
//! ```
//!
//! The set is read-only once parsed. Overview evaluation runs over all
//! records in parallel since each record is independent.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Deserialize;

use crate::decay::compute_decay;
use crate::error::{DecayError, Result};
use crate::recommend::strength_status;
use crate::sanitize::validate_decay_rate;
use crate::types::{SkillRecord, SkillSummary, Tier};

/// On-disk shape of one record
#[derive(Debug, Deserialize)]
struct RawSkillRecord {
    last_practice: String,
    decay_rate: f64,
}

/// Skill records keyed by name, iterated in name order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkillSet {
    records: BTreeMap<String, SkillRecord>,
}

impl SkillSet {
    /// Parse and validate the whole file. Any bad record rejects the set.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, RawSkillRecord> = serde_json::from_str(json)
            .map_err(|e| DecayError::invalid(format!("malformed skill data: {e}")))?;

        let mut records = BTreeMap::new();
        for (name, raw) in raw {
            let record = parse_record(&name, raw)?;
            records.insert(name, record);
        }

        Ok(Self { records })
    }

    /// Build from already-typed records, validating each decay rate.
    pub fn from_records(records: impl IntoIterator<Item = SkillRecord>) -> Result<Self> {
        let mut set = BTreeMap::new();
        for mut record in records {
            record.decay_rate = validate_decay_rate(record.decay_rate).map_err(|e| {
                DecayError::invalid(format!("skill {:?}: {e}", record.name))
            })?;
            set.insert(record.name.clone(), record);
        }
        Ok(Self { records: set })
    }

    pub fn get(&self, name: &str) -> Option<&SkillRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn parse_record(name: &str, raw: RawSkillRecord) -> Result<SkillRecord> {
    let last_practice_date = raw.last_practice.parse::<NaiveDate>().map_err(|e| {
        tracing::debug!(skill = %name, value = %raw.last_practice, "rejecting malformed date");
        DecayError::invalid(format!(
            "skill {name:?}: last_practice {:?} is not an ISO-8601 date: {e}",
            raw.last_practice
        ))
    })?;

    let decay_rate = validate_decay_rate(raw.decay_rate).map_err(|e| {
        tracing::debug!(skill = %name, decay_rate = raw.decay_rate, "rejecting decay rate");
        DecayError::invalid(format!("skill {name:?}: {e}"))
    })?;

    Ok(SkillRecord {
        name: name.to_string(),
        last_practice_date,
        decay_rate,
    })
}

/// Evaluate every record at its stored practice date, in name order.
pub fn summarize_all(skills: &SkillSet, today: NaiveDate) -> Result<Vec<SkillSummary>> {
    let records: Vec<&SkillRecord> = skills.iter().collect();

    records
        .par_iter()
        .map(|record| {
            let curve = compute_decay(record.decay_rate, record.last_practice_date, today)?;
            Ok(SkillSummary {
                name: record.name.clone(),
                days_elapsed: curve.days_elapsed,
                current_strength_pct: curve.current_strength_pct,
                tier: Tier::for_strength(curve.current_strength_pct),
                status: strength_status(curve.current_strength_pct),
            })
        })
        .collect()
}
