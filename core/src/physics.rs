// core/src/physics.rs
use crate::models::{Workout, WorkoutKind};

pub const M_IN_KM: f64 = 1000.0;     // meter per km
pub const MIN_IN_H: f64 = 60.0;      // minutter per time
pub const LEN_STEP_M: f64 = 0.65;    // skrittlengde (løp/gange)
pub const LEN_STROKE_M: f64 = 1.38;  // svømmetak

// Løp
pub const RUN_SPEED_MULTIPLIER: f64 = 18.0;
pub const RUN_SPEED_SHIFT: f64 = 20.0;

// Gange
pub const WLK_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const WLK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

// Svømming
pub const SWM_SPEED_SHIFT: f64 = 1.1;
pub const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Gulvdivisjon for flyttall (`a // b`): fmod-basert, rundet mot -inf.
/// Divisor 0 gir IEEE-kvotienten (inf/NaN), ingen panic.
pub fn floor_div(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return a / b;
    }
    let m = a % b;
    let mut div = (a - m) / b;
    if m != 0.0 && (b < 0.0) != (m < 0.0) {
        div -= 1.0;
    }
    if div != 0.0 {
        let mut fd = div.floor();
        if div - fd > 0.5 {
            fd += 1.0;
        }
        fd
    } else {
        0.0_f64.copysign(a / b)
    }
}

impl Workout {
    /// Skritt-/taklengde for varianten (meter).
    fn len_step_m(&self) -> f64 {
        match self.kind() {
            WorkoutKind::Swimming { .. } => LEN_STROKE_M,
            WorkoutKind::Running | WorkoutKind::SportsWalking { .. } => LEN_STEP_M,
        }
    }

    /// Distanse i km = antall bevegelser * lengde / 1000.
    /// Svømming bruker også denne (ikke bassenggeometri).
    pub fn distance_km(&self) -> f64 {
        self.action_count() as f64 * self.len_step_m() / M_IN_KM
    }

    /// Snittfart (km/t). Svømming regner fra bassenglengde * antall lengder.
    pub fn mean_speed_kmh(&self) -> f64 {
        match *self.kind() {
            WorkoutKind::Swimming { pool_length_m, pool_laps } => {
                pool_length_m * pool_laps / M_IN_KM / self.duration_hours()
            }
            WorkoutKind::Running | WorkoutKind::SportsWalking { .. } => {
                self.distance_km() / self.duration_hours()
            }
        }
    }

    /// Forbrente kalorier (kcal).
    pub fn calories_kcal(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        let weight = self.weight_kg();
        let duration = self.duration_hours();

        match *self.kind() {
            WorkoutKind::Running => {
                (RUN_SPEED_MULTIPLIER * speed - RUN_SPEED_SHIFT) * weight / M_IN_KM
                    * duration
                    * MIN_IN_H
            }
            WorkoutKind::SportsWalking { height_cm } => {
                (WLK_WEIGHT_MULTIPLIER * weight
                    + floor_div(speed.powi(2), height_cm) * WLK_SPEED_HEIGHT_MULTIPLIER * weight)
                    * duration
                    * MIN_IN_H
            }
            // ingen varighet-ledd her
            WorkoutKind::Swimming { .. } => {
                (speed + SWM_SPEED_SHIFT) * SWM_WEIGHT_MULTIPLIER * weight
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_div_rounds_toward_neg_inf() {
        assert_eq!(floor_div(34.2225, 180.0), 0.0);
        assert_eq!(floor_div(7.0, 2.0), 3.0);
        assert_eq!(floor_div(-7.0, 2.0), -4.0);
        assert_eq!(floor_div(7.0, -2.0), -4.0);
        assert_eq!(floor_div(360.5, 180.0), 2.0);
    }

    #[test]
    fn floor_div_zero_divisor_follows_ieee() {
        assert!(floor_div(1.0, 0.0).is_infinite());
        assert!(floor_div(0.0, 0.0).is_nan());
    }

    #[test]
    fn swimming_uses_stroke_length_for_distance() {
        let w = Workout::swimming(1000, 1.0, 80.0, 25.0, 40.0);
        assert!((w.distance_km() - 1.38).abs() < 1e-12);
    }
}
