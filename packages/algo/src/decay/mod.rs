//! Exponential Skill Decay
//!
//! Core theory:
//! - A skill is at full strength right after practice
//! - Strength decays exponentially with the number of whole days since then
//!
//! Mathematical formula:
//! - Strength: S(d) = 100 * e^(-k * d)
//!   - k: per-day decay rate (k >= 0, k = 0 gives a flat curve)
//!   - d: days since last practice
//!
//! A last-practice date after "today" is treated as practiced today.

use chrono::NaiveDate;

use crate::error::Result;
use crate::recommend::{adjacent_skills, next_practice_date};
use crate::sanitize::{floor_strength, round_pct, validate_decay_rate};
use crate::types::{CurvePoint, DecayCurve, DecayResult, SkillRecord, Tier, FULL_STRENGTH};

/// Strength (percent, unrounded) `day_offset` days after practice.
///
/// Callers are expected to pass a validated rate.
#[inline]
pub fn strength_at(decay_rate: f64, day_offset: u32) -> f64 {
    FULL_STRENGTH * (-decay_rate * f64::from(day_offset)).exp()
}

/// Whole days from `last_practice` to `today`, clamped at 0.
pub fn days_elapsed(last_practice: NaiveDate, today: NaiveDate) -> u32 {
    let days = today.signed_duration_since(last_practice).num_days();
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// Compute elapsed days, current strength and the plotted curve.
///
/// Fails with `InvalidInput` for negative or non-finite rates.
pub fn compute_decay(
    decay_rate: f64,
    last_practice: NaiveDate,
    today: NaiveDate,
) -> Result<DecayCurve> {
    let decay_rate = validate_decay_rate(decay_rate)?;
    let days_elapsed = days_elapsed(last_practice, today);

    let current_strength_pct = round_pct(floor_strength(strength_at(decay_rate, days_elapsed)));

    let curve_samples = (0..=days_elapsed)
        .map(|day_offset| CurvePoint {
            day_offset,
            strength_pct: strength_at(decay_rate, day_offset),
        })
        .collect();

    Ok(DecayCurve {
        days_elapsed,
        current_strength_pct,
        curve_samples,
    })
}

/// Evaluate a skill record on `today`.
///
/// `last_practice_override` replaces the stored date when present.
pub fn evaluate(
    record: &SkillRecord,
    last_practice_override: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<DecayResult> {
    let last_practice = last_practice_override.unwrap_or(record.last_practice_date);
    let curve = compute_decay(record.decay_rate, last_practice, today)?;

    Ok(DecayResult {
        days_elapsed: curve.days_elapsed,
        current_strength_pct: curve.current_strength_pct,
        recommendation_tier: Tier::for_strength(curve.current_strength_pct),
        curve_samples: curve.curve_samples,
        next_practice_date: next_practice_date(today),
        adjacent_skills: adjacent_skills(&record.name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn python_record() -> SkillRecord {
        SkillRecord {
            name: "Python".to_string(),
            last_practice_date: date("2024-01-15"),
            decay_rate: 0.05,
        }
    }

    // ==================== Strength Tests ====================

    #[test]
    fn test_strength_at_day_zero_is_full() {
        for rate in [0.0, 0.05, 1.0, 25.0] {
            assert_eq!(strength_at(rate, 0), 100.0);
        }
    }

    #[test]
    fn test_zero_rate_is_flat() {
        for day in [0, 1, 10, 365, 10_000] {
            assert_eq!(strength_at(0.0, day), 100.0);
        }
    }

    #[test]
    fn test_strength_matches_formula() {
        let expected = 100.0 * (-0.5f64).exp();
        assert!((strength_at(0.05, 10) - expected).abs() < EPSILON);
    }

    // ==================== Elapsed Days Tests ====================

    #[test]
    fn test_days_elapsed_counts_calendar_days() {
        assert_eq!(days_elapsed(date("2024-01-15"), date("2024-01-25")), 10);
        assert_eq!(days_elapsed(date("2023-12-31"), date("2024-03-01")), 61);
    }

    #[test]
    fn test_future_last_practice_is_clamped() {
        assert_eq!(days_elapsed(date("2024-02-01"), date("2024-01-25")), 0);
    }

    // ==================== compute_decay Tests ====================

    #[test]
    fn test_compute_decay_reference_scenario() {
        let curve = compute_decay(0.05, date("2024-01-15"), date("2024-01-25")).unwrap();

        assert_eq!(curve.days_elapsed, 10);
        assert_eq!(curve.current_strength_pct, 60.65);
        assert_eq!(curve.curve_samples.len(), 11);
        assert_eq!(curve.curve_samples[0].day_offset, 0);
        assert_eq!(curve.curve_samples[0].strength_pct, 100.0);
        assert_eq!(curve.curve_samples[10].day_offset, 10);
    }

    #[test]
    fn test_curve_samples_are_unrounded() {
        let curve = compute_decay(0.05, date("2024-01-15"), date("2024-01-25")).unwrap();
        let last = curve.curve_samples.last().unwrap();
        assert!((last.strength_pct - 100.0 * (-0.5f64).exp()).abs() < EPSILON);
        assert_ne!(last.strength_pct, curve.current_strength_pct);
    }

    #[test]
    fn test_same_day_gives_single_point() {
        let curve = compute_decay(0.3, date("2024-01-25"), date("2024-01-25")).unwrap();
        assert_eq!(curve.days_elapsed, 0);
        assert_eq!(curve.current_strength_pct, 100.0);
        assert_eq!(
            curve.curve_samples,
            vec![CurvePoint {
                day_offset: 0,
                strength_pct: 100.0
            }]
        );
    }

    #[test]
    fn test_negative_rate_fails() {
        let result = compute_decay(-0.1, date("2024-01-15"), date("2024-01-25"));
        assert!(result.is_err());
    }

    #[test]
    fn test_steep_decay_rounds_to_zero() {
        let curve = compute_decay(5.0, date("2020-01-01"), date("2024-01-01")).unwrap();
        assert_eq!(curve.current_strength_pct, 0.0);
        assert!(curve.curve_samples.iter().all(|p| p.strength_pct >= 0.0));
    }

    // ==================== evaluate Tests ====================

    #[test]
    fn test_evaluate_reference_scenario() {
        let result = evaluate(&python_record(), None, date("2024-01-25")).unwrap();

        assert_eq!(result.days_elapsed, 10);
        assert_eq!(result.current_strength_pct, 60.65);
        assert_eq!(result.recommendation_tier, Tier::Moderate);
        assert_eq!(result.next_practice_date, date("2024-01-27"));
        assert_eq!(
            result.adjacent_skills,
            vec!["Data Analysis", "Automation", "Machine Learning"]
        );
    }

    #[test]
    fn test_evaluate_future_override_is_practiced_today() {
        let result =
            evaluate(&python_record(), Some(date("2024-02-01")), date("2024-01-25")).unwrap();

        assert_eq!(result.days_elapsed, 0);
        assert_eq!(result.current_strength_pct, 100.0);
        assert_eq!(result.recommendation_tier, Tier::Light);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let a = evaluate(&python_record(), None, date("2024-03-01")).unwrap();
        let b = evaluate(&python_record(), None, date("2024-03-01")).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
