use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::errors::WorkoutError;
use crate::types::{Cfg, Package};

/// Pakke i JSON: enten `["RUN", [15000, 1, 75]]` eller `{"code": "RUN", "args": [...]}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PackageIn {
    Pair(String, Vec<f64>),
    Object(Package),
}

impl From<PackageIn> for Package {
    fn from(p: PackageIn) -> Self {
        match p {
            PackageIn::Pair(code, args) => Package { code, args },
            PackageIn::Object(p) => p,
        }
    }
}

fn parse_with_path<T: DeserializeOwned>(json_in: &str) -> Result<T, WorkoutError> {
    let de = &mut serde_json::Deserializer::from_str(json_in);
    serde_path_to_error::deserialize(de).map_err(|e| WorkoutError::Json {
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}

/// Leser en liste med pakker fra JSON.
pub fn packages_from_json(json_in: &str) -> Result<Vec<Package>, WorkoutError> {
    let raw: Vec<PackageIn> = parse_with_path(json_in)?;
    Ok(raw.into_iter().map(Package::from).collect())
}

/// Leser kjøre-konfig fra JSON. Manglende felt får default.
pub fn cfg_from_json(json_in: &str) -> Result<Cfg, WorkoutError> {
    parse_with_path(json_in)
}
