use log::{error, warn};

use crate::errors::WorkoutError;
use crate::metrics::Metrics;
use crate::reader::read_package;
use crate::report::format_report;
use crate::types::{Cfg, Package};

/// Resultat av en batch: ferdige linjer + (indeks, feil) for pakker som feilet.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub lines: Vec<String>,
    pub failures: Vec<(usize, WorkoutError)>,
}

impl BatchOutcome {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Kjør alle pakker. Default: feilende pakke hoppes over og rapporteres.
/// Med `cfg.fail_fast` stopper vi ved første feil.
pub fn process_packages(packages: &[Package], cfg: &Cfg, metrics: &Metrics) -> BatchOutcome {
    let mut out = BatchOutcome::default();

    for (i, package) in packages.iter().enumerate() {
        let workout = match read_package(package) {
            Ok(w) => w,
            Err(e) => {
                metrics.record_failed(&e);
                if cfg.fail_fast {
                    error!("package #{i} ({}) failed, aborting batch: {e}", package.code);
                    out.failures.push((i, e));
                    break;
                }
                warn!("package #{i} ({}) skipped: {e}", package.code);
                out.failures.push((i, e));
                continue;
            }
        };

        let info = workout.show_training_info();
        let line = if cfg.json_output {
            info.to_json()
        } else {
            format_report(&info)
        };

        metrics.record_processed(&info.training_type);
        out.lines.push(line);
    }

    out
}
