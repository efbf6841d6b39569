// Quiz Engine: tallies answers per category and picks a recommendation.
// Scoring is pure; only the recommendation image touches the filesystem.

pub mod engine;
pub mod handlers;

pub use engine::{evaluate, tally, QuizResult, Scores};
