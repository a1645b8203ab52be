use serde_json::json;

use crate::models::Workout;
use crate::types::SummaryReport;

impl Workout {
    /// Oppsummering av økten. Ren funksjon av feltene; to kall gir lik rapport.
    pub fn show_training_info(&self) -> SummaryReport {
        SummaryReport {
            training_type: self.kind().label().to_string(),
            duration: self.duration_hours(),
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.calories_kcal(),
        }
    }
}

/// Fast mal, tre desimaler på alle tallfelt.
pub fn format_report(report: &SummaryReport) -> String {
    format!(
        "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
         Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
        report.training_type, report.duration, report.distance, report.speed, report.calories
    )
}

impl SummaryReport {
    pub fn message(&self) -> String {
        format_report(self)
    }

    /// JSON-objekt med de fem feltene. Ikke-endelige tall blir `null`.
    pub fn to_json(&self) -> String {
        json!({
            "training_type": self.training_type,
            "duration": self.duration,
            "distance": self.distance,
            "speed": self.speed,
            "calories": self.calories,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_renders_with_three_decimals() {
        let r = SummaryReport {
            training_type: "Running".into(),
            duration: 0.0,
            distance: 0.0,
            speed: 0.0,
            calories: 0.0,
        };
        assert_eq!(
            format_report(&r),
            "Тип тренировки: Running; Длительность: 0.000 ч.; Дистанция: 0.000 км; \
             Ср. скорость: 0.000 км/ч; Потрачено ккал: 0.000."
        );
    }
}
