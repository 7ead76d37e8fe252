//! symcheck-matching
//!
//! The condition-matching engine. A pure, synchronous function of the
//! user's report and the condition list: every condition is scored on its
//! own (symptom overlap first, then demographic and history factors), the
//! score is normalized against what that condition could have earned, and
//! the survivors are ranked by raw score.
//!
//! ```ignore
//! let catalog = symcheck_catalog::Catalog::load_builtin()?;
//! let user = UserData::new().with_age("34").with_symptoms(&["fever", "cough"]);
//! let matches = match_conditions(&user, catalog.conditions().all(), &catalog);
//! ```

pub mod engine;
mod factors;
pub mod weights;

pub use engine::{
    MatchOptions, humanize_id, match_conditions, match_conditions_with, score_condition,
};
