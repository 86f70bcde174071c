use chrono::NaiveDate;
use serde::Serialize;
use skill_decay_algo::{
    evaluate, recommend, roadmap, strength_status, DecayError, DecayResult, Recommendation,
    RoadmapStage, SkillRecord, SkillSet, StrengthStatus,
};

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("unknown skill: {0}")]
    UnknownSkill(String),
    #[error(transparent)]
    InvalidInput(#[from] DecayError),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBanner {
    pub status: StrengthStatus,
    pub message: &'static str,
}

/// Everything the dashboard page shows for one skill
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub skill: String,
    pub last_practice: NaiveDate,
    pub today: NaiveDate,
    #[serde(flatten)]
    pub decay: DecayResult,
    pub recommendation: Recommendation,
    pub banner: StatusBanner,
    pub roadmap: Vec<RoadmapStage>,
}

pub fn find_skill<'a>(skills: &'a SkillSet, name: &str) -> Result<&'a SkillRecord, DashboardError> {
    skills
        .get(name)
        .ok_or_else(|| DashboardError::UnknownSkill(name.to_string()))
}

pub fn build_dashboard(
    skills: &SkillSet,
    name: &str,
    last_practice_override: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<DashboardView, DashboardError> {
    let record = find_skill(skills, name)?;
    let decay = evaluate(record, last_practice_override, today)?;

    let status = strength_status(decay.current_strength_pct);

    tracing::debug!(
        skill = %record.name,
        days_elapsed = decay.days_elapsed,
        strength = decay.current_strength_pct,
        tier = decay.recommendation_tier.as_str(),
        "dashboard evaluated"
    );

    Ok(DashboardView {
        skill: record.name.clone(),
        last_practice: last_practice_override.unwrap_or(record.last_practice_date),
        today,
        recommendation: recommend(decay.current_strength_pct),
        banner: StatusBanner {
            status,
            message: status.message(),
        },
        roadmap: roadmap(&record.name),
        decay,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use skill_decay_algo::Tier;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn skills() -> SkillSet {
        SkillSet::from_json_str(
            r#"{
                "Python": {"last_practice": "2024-01-15", "decay_rate": 0.05},
                "Chess": {"last_practice": "2023-06-01", "decay_rate": 0.02}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_python_dashboard() {
        let view = build_dashboard(&skills(), "Python", None, date("2024-01-25")).unwrap();

        assert_eq!(view.last_practice, date("2024-01-15"));
        assert_eq!(view.decay.days_elapsed, 10);
        assert_eq!(view.decay.current_strength_pct, 60.65);
        assert_eq!(view.recommendation.tier, Tier::Moderate);
        assert_eq!(view.recommendation.action_text, "Practice core concepts");
        assert_eq!(view.banner.status, StrengthStatus::Healthy);
        assert_eq!(view.roadmap[0].focus, "Basics of Python");
    }

    #[test]
    fn test_override_date_is_reported() {
        let view =
            build_dashboard(&skills(), "Python", Some(date("2024-01-24")), date("2024-01-25"))
                .unwrap();
        assert_eq!(view.last_practice, date("2024-01-24"));
        assert_eq!(view.decay.days_elapsed, 1);
    }

    #[test]
    fn test_unknown_skill_and_fallback_adjacent() {
        let err = build_dashboard(&skills(), "Cooking", None, date("2024-01-25")).unwrap_err();
        assert!(matches!(err, DashboardError::UnknownSkill(name) if name == "Cooking"));

        let view = build_dashboard(&skills(), "Chess", None, date("2024-01-25")).unwrap();
        assert_eq!(view.decay.adjacent_skills, vec!["Problem Solving", "System Design"]);
    }

    #[test]
    fn test_decaying_banner() {
        let view = build_dashboard(&skills(), "Chess", None, date("2024-01-25")).unwrap();
        // 238 days at k = 0.02
        assert!(view.decay.current_strength_pct < 50.0);
        assert_eq!(view.banner.status, StrengthStatus::Decaying);
        assert_eq!(view.banner.message, "Skill is decaying fast. Time to practice!");
        assert_eq!(view.recommendation.tier, Tier::Intensive);
    }
}
