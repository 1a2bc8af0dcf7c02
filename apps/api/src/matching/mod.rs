// Skill matching: the pure matcher, ranking and aggregate statistics over it,
// and the candidate-side views and handlers that feed it rows.

pub mod handlers;
pub mod ranking;
pub mod skill_matcher;
pub mod stats;
pub mod views;
