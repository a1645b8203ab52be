use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

use crate::errors::WorkoutError;

/// Tellere for batch-kjøring. Egen registry per instans (ingen global state).
pub struct Metrics {
    registry: Registry,
    processed: IntCounterVec,
    failed: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, WorkoutError> {
        let registry = Registry::new();

        let processed = IntCounterVec::new(
            Opts::new("workouts_processed_total", "Økter beregnet og formatert"),
            &["kind"],
        )?;
        let failed = IntCounterVec::new(
            Opts::new("workouts_failed_total", "Pakker som feilet i dispatcher"),
            &["reason"],
        )?;

        registry.register(Box::new(processed.clone()))?;
        registry.register(Box::new(failed.clone()))?;

        Ok(Self { registry, processed, failed })
    }

    pub fn record_processed(&self, kind: &str) {
        self.processed.with_label_values(&[kind]).inc();
    }

    pub fn record_failed(&self, err: &WorkoutError) {
        self.failed.with_label_values(&[err.reason()]).inc();
    }

    pub fn processed_total(&self, kind: &str) -> u64 {
        self.processed.with_label_values(&[kind]).get()
    }

    pub fn failed_total(&self, reason: &str) -> u64 {
        self.failed.with_label_values(&[reason]).get()
    }

    /// Prometheus tekstformat.
    pub fn gather_text(&self) -> Result<String, WorkoutError> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
