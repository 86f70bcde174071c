use std::sync::Arc;
use std::time::{Instant, SystemTime};

use chrono::NaiveDate;
use skill_decay_algo::SkillSet;

/// Source of "today" for requests that do not pass one explicitly
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the host
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    started_at_system: SystemTime,
    skills: Arc<SkillSet>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(skills: SkillSet) -> Self {
        Self::with_clock(skills, Arc::new(SystemClock))
    }

    pub fn with_clock(skills: SkillSet, clock: Arc<dyn Clock>) -> Self {
        Self {
            started_at: Instant::now(),
            started_at_system: SystemTime::now(),
            skills: Arc::new(skills),
            clock,
        }
    }

    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn started_at_system(&self) -> SystemTime {
        self.started_at_system
    }
}
