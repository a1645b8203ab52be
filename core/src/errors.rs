// core/src/errors.rs
use thiserror::Error;

use crate::models::WorkoutCode;

/// Feil fra dispatcher, parsing og metrikk.
///
/// Kalori-beregning kan ikke feile: settet av treningstyper er lukket og
/// hver gren matches uttømmende i `physics`.
#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("Тип тренировки {code:?} не найден. Доступные типы:{}", known_codes())]
    UnknownWorkoutType { code: String },

    #[error("{kind} expects {expected} arguments, got {got}")]
    ArityMismatch {
        kind: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid action count: must be a whole number. got {got}")]
    InvalidActionCount { got: f64 },

    #[error("parse error at {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("metrics registry: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl WorkoutError {
    /// Kort label for metrikk (`workouts_failed_total{reason=..}`).
    pub fn reason(&self) -> &'static str {
        match self {
            WorkoutError::UnknownWorkoutType { .. } => "unknown_workout_type",
            WorkoutError::ArityMismatch { .. } => "arity_mismatch",
            WorkoutError::InvalidActionCount { .. } => "invalid_action_count",
            WorkoutError::Json { .. } => "json",
            WorkoutError::Metrics(_) => "metrics",
        }
    }
}

fn known_codes() -> String {
    WorkoutCode::ALL
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
