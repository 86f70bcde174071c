//! Common Types and Constants
//!
//! Shared data structures used across the decay and recommendation modules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Strength of a freshly practiced skill (percent)
pub const FULL_STRENGTH: f64 = 100.0;

/// Above this strength only light revision is needed
pub const LIGHT_THRESHOLD: f64 = 75.0;

/// Above this strength (and up to [`LIGHT_THRESHOLD`]) core practice is needed
pub const MODERATE_THRESHOLD: f64 = 40.0;

/// Below this strength the status banner warns about decay.
/// Independent of the tier thresholds.
pub const DECAYING_THRESHOLD: f64 = 50.0;

/// Days between "today" and the suggested next session, for every tier
pub const NEXT_PRACTICE_OFFSET_DAYS: u64 = 2;

/// Decimal places kept on the reported current strength
pub const STRENGTH_DECIMALS: i32 = 2;

/// Suggestions offered for skills missing from the adjacency table
pub const FALLBACK_ADJACENT_SKILLS: [&str; 2] = ["Problem Solving", "System Design"];

// ==================== Skill Records ====================

/// A skill as loaded from the read-only skill data file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    /// Unique key within the record set
    pub name: String,
    /// Calendar date of the last practice session
    #[serde(rename = "lastPractice")]
    pub last_practice_date: NaiveDate,
    /// Exponential decay constant k, per day (k >= 0)
    pub decay_rate: f64,
}

// ==================== Decay Types ====================

/// One sample of the decay curve
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePoint {
    /// Days since last practice
    pub day_offset: u32,
    /// Unrounded strength at that day (percent)
    pub strength_pct: f64,
}

/// Output of the pure decay computation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecayCurve {
    /// Whole days since last practice, clamped at 0
    pub days_elapsed: u32,
    /// Strength at `days_elapsed`, floored at 0 and rounded to 2 decimals
    pub current_strength_pct: f64,
    /// Samples for day 0..=days_elapsed
    pub curve_samples: Vec<CurvePoint>,
}

/// Full evaluation of one skill on one day
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecayResult {
    pub days_elapsed: u32,
    pub current_strength_pct: f64,
    pub curve_samples: Vec<CurvePoint>,
    pub recommendation_tier: Tier,
    pub next_practice_date: NaiveDate,
    pub adjacent_skills: Vec<String>,
}

// ==================== Recommendation Types ====================

/// Practice intensity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Light,
    Moderate,
    Intensive,
}

impl Tier {
    /// Threshold table, first match wins:
    /// `> 75` light, `> 40` moderate, everything else intensive.
    pub fn for_strength(strength_pct: f64) -> Self {
        if strength_pct > LIGHT_THRESHOLD {
            Tier::Light
        } else if strength_pct > MODERATE_THRESHOLD {
            Tier::Moderate
        } else {
            Tier::Intensive
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            Tier::Light => "Light revision once a week",
            Tier::Moderate => "Practice core concepts",
            Tier::Intensive => "Immediate intensive practice",
        }
    }

    pub fn frequency(&self) -> &'static str {
        match self {
            Tier::Light => "1 session / week",
            Tier::Moderate => "3 sessions / week",
            Tier::Intensive => "Daily practice",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Light => "LIGHT",
            Tier::Moderate => "MODERATE",
            Tier::Intensive => "INTENSIVE",
        }
    }
}

/// Recommendation with its display copy
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub tier: Tier,
    pub action_text: String,
    pub frequency_text: String,
}

/// Status banner state shown next to the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StrengthStatus {
    Decaying,
    Healthy,
}

impl StrengthStatus {
    pub fn message(&self) -> &'static str {
        match self {
            StrengthStatus::Decaying => "Skill is decaying fast. Time to practice!",
            StrengthStatus::Healthy => "Skill is in good condition.",
        }
    }
}

// ==================== Roadmap Types ====================

/// Learning stage of the mini roadmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Beginner,
    Intermediate,
    Advanced,
}

/// One roadmap row
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStage {
    pub stage: Stage,
    pub focus: String,
}

// ==================== Overview Types ====================

/// Per-skill line of the overview, evaluated at the stored practice date
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSummary {
    pub name: String,
    pub days_elapsed: u32,
    pub current_strength_pct: f64,
    pub tier: Tier,
    pub status: StrengthStatus,
}
