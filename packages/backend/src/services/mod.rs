pub mod chart;
pub mod dashboard;
pub mod skills;
