//! # skill-decay-algo - 技能遗忘模型
//!
//! Pure Rust implementation of the skill decay dashboard model:
//!
//! - **Exponential decay** - strength `100 * e^(-k*d)` since the last practice
//! - **Practice tiers** - fixed thresholds mapping strength to advice
//! - **Adjacent skills** - static suggestion table with a fallback
//!
//! ## Design
//!
//! - **Stateless** - every operation is a pure function of its inputs
//! - **Explicit time** - "today" is always a parameter, never read from a clock
//! - **Read-only data** - the record set is parsed once and passed by reference
//!
//! ## Modules
//!
//! - [`decay`] - strength, elapsed days, curve sampling, full evaluation
//! - [`recommend`] - tiers, next practice date, adjacent skills, banner, roadmap
//! - [`records`] - skill data file parsing and overview evaluation
//! - [`sanitize`] - decay-rate validation and rounding
//! - [`types`] - shared types and constants
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use skill_decay_algo::{evaluate, SkillSet, Tier};
//!
//! let skills = SkillSet::from_json_str(
//!     r#"{"Python": {"last_practice": "2024-01-15", "decay_rate": 0.05}}"#,
//! ).unwrap();
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 25).unwrap();
//! let result = evaluate(skills.get("Python").unwrap(), None, today).unwrap();
//!
//! assert_eq!(result.days_elapsed, 10);
//! assert_eq!(result.current_strength_pct, 60.65);
//! assert_eq!(result.recommendation_tier, Tier::Moderate);
//! ```

// ============================================================================
// 模块声明
// ============================================================================

pub mod decay;
pub mod error;
pub mod recommend;
pub mod records;
pub mod sanitize;
pub mod types;

// ============================================================================
// 重新导出
// ============================================================================

/// 重新导出所有公共类型
pub use types::*;

pub use error::DecayError;

pub use decay::{compute_decay, days_elapsed, evaluate, strength_at};

pub use recommend::{adjacent_skills, next_practice_date, recommend, roadmap, strength_status};

pub use records::{summarize_all, SkillSet};
