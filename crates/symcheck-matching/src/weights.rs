//! Scoring weights and normalization constants.
//!
//! Symptom overlap is weighted highest; everything else is a secondary
//! signal. Changing the relative magnitudes changes every ranking.

pub const W_SYMPTOM: f64 = 3.0;
pub const W_AGE: f64 = 1.5;
pub const W_GENDER: f64 = 1.5;
pub const W_DURATION: f64 = 1.2;
pub const W_FAMILY: f64 = 1.8;
pub const W_MEDICATION: f64 = 1.0;
pub const W_ALLERGY: f64 = 1.0;
pub const W_PAST: f64 = 1.5;

/// Multiplier on the family-history share.
pub const FAMILY_HISTORY_BOOST: f64 = 1.5;
/// Multiplier on the past-condition share.
pub const PAST_CONDITION_BOOST: f64 = 1.2;

/// Ages at most this many years outside the range still earn partial credit.
pub const AGE_PARTIAL_BAND: f64 = 5.0;
/// Distance at which the partial age credit would decay to zero.
pub const AGE_DECAY_SPAN: f64 = 10.0;

/// Share of the non-symptom maximum counted in the percentage denominator.
pub const OTHER_FACTOR_SHARE: f64 = 0.6;

/// Matches at or below this percentage are dropped.
pub const MIN_MATCH_PERCENTAGE: u8 = 10;
pub const MAX_RESULTS: usize = 6;
