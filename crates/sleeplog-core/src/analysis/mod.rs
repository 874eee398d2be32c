//! The statistics and recommendation engine.
//!
//! Everything here is a pure function of its inputs: no I/O, no clock, and
//! no failure modes beyond what the types already rule out.

mod format;
mod metrics;
mod recommend;
mod stats;

pub use format::format_minutes;
pub use metrics::{
    consistency_label, goal_attainment, quality_label, streak, streak_label, Dashboard,
};
pub use recommend::{
    generate_recommendations, generate_recommendations_with, Recommendation, Thresholds,
};
pub use stats::{
    best_and_worst, consistency_component, generate_stats, SleepStats, CONSISTENCY_DIVISOR,
};
