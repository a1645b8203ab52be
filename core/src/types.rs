use serde::{Deserialize, Serialize};

/// Ferdig oppsummering av én økt. Bygges én gang per `Workout`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub training_type: String,
    pub duration: f64, // timer
    pub distance: f64, // km
    pub speed: f64,    // km/t
    pub calories: f64, // kcal
}

/// Rå pakke fra sensoren: kode + posisjonelle argumenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub code: String,
    pub args: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, args: &[f64]) -> Self {
        Self { code: code.into(), args: args.to_vec() }
    }
}

/// Kjøre-konfig for batch og utskrift. Formelkonstantene er ikke her.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Cfg {
    /// Stopp ved første feilende pakke (default: hopp over og rapporter).
    #[serde(default)]
    pub fail_fast: bool,
    /// JSON-objekt per linje i stedet for tekstmalen.
    #[serde(default)]
    pub json_output: bool,
}

/// Sample-datasettet fra sensorene.
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}
