//! Practice Recommendations
//!
//! Static policy layered over the decay model:
//! - Tier table (`> 75` light, `> 40` moderate, otherwise intensive)
//! - Next practice date (fixed offset, same for every tier)
//! - Adjacent skills lookup
//! - Status banner (`< 50` decaying) and the three-stage roadmap

use chrono::{Days, NaiveDate};

use crate::types::{
    Recommendation, RoadmapStage, Stage, StrengthStatus, Tier, DECAYING_THRESHOLD,
    FALLBACK_ADJACENT_SKILLS, NEXT_PRACTICE_OFFSET_DAYS,
};

/// Related skills, in display order
const ADJACENT_SKILLS: &[(&str, &[&str])] = &[
    ("Python", &["Data Analysis", "Automation", "Machine Learning"]),
    ("Machine Learning", &["Deep Learning", "MLOps", "Statistics"]),
    ("Web Development", &["React", "Backend APIs", "UI/UX"]),
    ("Data Science", &["SQL", "Visualization", "Model Deployment"]),
];

/// Map a strength to its tier and display copy. Total over all inputs.
pub fn recommend(current_strength_pct: f64) -> Recommendation {
    let tier = Tier::for_strength(current_strength_pct);
    Recommendation {
        tier,
        action_text: tier.action().to_string(),
        frequency_text: tier.frequency().to_string(),
    }
}

/// Suggested next session: always `today + 2` days.
///
/// The offset does not follow the tier's frequency text; a daily-practice
/// tier still gets a session two days out.
pub fn next_practice_date(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_days(Days::new(NEXT_PRACTICE_OFFSET_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

/// Skills worth learning next, with a generic fallback for unknown names.
pub fn adjacent_skills(skill_name: &str) -> Vec<String> {
    let skills = ADJACENT_SKILLS
        .iter()
        .find(|(name, _)| *name == skill_name)
        .map(|(_, skills)| *skills)
        .unwrap_or(&FALLBACK_ADJACENT_SKILLS[..]);

    skills.iter().map(|s| s.to_string()).collect()
}

pub fn strength_status(current_strength_pct: f64) -> StrengthStatus {
    if current_strength_pct < DECAYING_THRESHOLD {
        StrengthStatus::Decaying
    } else {
        StrengthStatus::Healthy
    }
}

pub fn roadmap(skill_name: &str) -> Vec<RoadmapStage> {
    vec![
        RoadmapStage {
            stage: Stage::Beginner,
            focus: format!("Basics of {skill_name}"),
        },
        RoadmapStage {
            stage: Stage::Intermediate,
            focus: format!("Hands-on projects with {skill_name}"),
        },
        RoadmapStage {
            stage: Stage::Advanced,
            focus: "Optimization & real-world use".to_string(),
        },
    ]
}
