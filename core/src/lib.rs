//! Treningsstatistikk (distanse, snittfart, kalorier) fra rå sensordata
//! for løp, sportsgange og svømming.

pub mod batch;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod physics;
pub mod reader;
pub mod report;
pub mod storage;
pub mod types;

// Re-eksporter det binæren og testene bruker mest
pub use batch::{process_packages, BatchOutcome};
pub use errors::WorkoutError;
pub use metrics::Metrics;
pub use models::{Workout, WorkoutCode, WorkoutKind};
pub use physics::floor_div;
pub use reader::{build_workout, create_workout, read_package};
pub use report::format_report;
pub use storage::{cfg_from_json, packages_from_json};
pub use types::{default_packages, Cfg, Package, SummaryReport};
