use log::debug;

use crate::errors::WorkoutError;
use crate::models::{Workout, WorkoutCode};
use crate::types::Package;

/// Første argument er et antall; må være et helt tall. Fortegn sjekkes ikke.
fn action_count(raw: f64) -> Result<i64, WorkoutError> {
    let in_range = raw >= i64::MIN as f64 && raw < i64::MAX as f64;
    if !raw.is_finite() || raw.fract() != 0.0 || !in_range {
        return Err(WorkoutError::InvalidActionCount { got: raw });
    }
    Ok(raw as i64)
}

/// Bygg variant for en kjent kode. Argumentene tildeles posisjonelt.
pub fn build_workout(code: WorkoutCode, args: &[f64]) -> Result<Workout, WorkoutError> {
    let workout = match (code, args) {
        (WorkoutCode::Swm, &[action, duration, weight, pool_length, pool_laps]) => {
            Workout::swimming(action_count(action)?, duration, weight, pool_length, pool_laps)
        }
        (WorkoutCode::Run, &[action, duration, weight]) => {
            Workout::running(action_count(action)?, duration, weight)
        }
        (WorkoutCode::Wlk, &[action, duration, weight, height]) => {
            Workout::sports_walking(action_count(action)?, duration, weight, height)
        }
        _ => {
            return Err(WorkoutError::ArityMismatch {
                kind: code.kind_label(),
                expected: code.arity(),
                got: args.len(),
            })
        }
    };

    debug!("built {} from {} args", workout.kind().label(), args.len());
    Ok(workout)
}

/// Les data fra sensoren: kode -> riktig variant.
pub fn create_workout(code: &str, args: &[f64]) -> Result<Workout, WorkoutError> {
    let code: WorkoutCode = code.parse()?;
    build_workout(code, args)
}

pub fn read_package(package: &Package) -> Result<Workout, WorkoutError> {
    create_workout(&package.code, &package.args)
}
