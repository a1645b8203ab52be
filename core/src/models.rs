use std::fmt;
use std::str::FromStr;

use crate::errors::WorkoutError;

/// Kort kode fra sensoren. Rekkefølgen i `ALL` er dispatcher-rekkefølgen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Swm,
    Run,
    Wlk,
}

impl WorkoutCode {
    pub const ALL: [WorkoutCode; 3] = [WorkoutCode::Swm, WorkoutCode::Run, WorkoutCode::Wlk];

    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutCode::Swm => "SWM",
            WorkoutCode::Run => "RUN",
            WorkoutCode::Wlk => "WLK",
        }
    }

    /// Antall posisjonelle argumenter konstruktøren forventer.
    pub fn arity(self) -> usize {
        match self {
            WorkoutCode::Swm => 5,
            WorkoutCode::Run => 3,
            WorkoutCode::Wlk => 4,
        }
    }

    pub fn kind_label(self) -> &'static str {
        match self {
            WorkoutCode::Swm => "Swimming",
            WorkoutCode::Run => "Running",
            WorkoutCode::Wlk => "SportsWalking",
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutCode::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| WorkoutError::UnknownWorkoutType { code: s.to_string() })
    }
}

/// Variant-spesifikke felt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutKind {
    Running,
    SportsWalking {
        height_cm: f64,
    },
    Swimming {
        pool_length_m: f64, // meter
        pool_laps: f64,
    },
}

impl WorkoutKind {
    pub fn label(&self) -> &'static str {
        self.code().kind_label()
    }

    pub fn code(&self) -> WorkoutCode {
        match self {
            WorkoutKind::Running => WorkoutCode::Run,
            WorkoutKind::SportsWalking { .. } => WorkoutCode::Wlk,
            WorkoutKind::Swimming { .. } => WorkoutCode::Swm,
        }
    }
}

/// Én økt: felles felt + variant. Ingen felt endres etter konstruksjon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Workout {
    action_count: i64,   // skritt eller svømmetak
    duration_hours: f64, // timer
    weight_kg: f64,      // kg
    kind: WorkoutKind,
}

impl Workout {
    pub fn running(action_count: i64, duration_hours: f64, weight_kg: f64) -> Self {
        Self { action_count, duration_hours, weight_kg, kind: WorkoutKind::Running }
    }

    pub fn sports_walking(
        action_count: i64,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
            kind: WorkoutKind::SportsWalking { height_cm },
        }
    }

    pub fn swimming(
        action_count: i64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: f64,
    ) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
            kind: WorkoutKind::Swimming { pool_length_m, pool_laps },
        }
    }

    // getters
    pub fn action_count(&self) -> i64 {
        self.action_count
    }
    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
    pub fn kind(&self) -> &WorkoutKind {
        &self.kind
    }
}
