//! Policy types and client data records

use crate::error::QuoteError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Record key holding the vehicle model year
pub const VEHICLE_YEAR_KEY: &str = "anio_auto";

/// Record key holding the insured's age
pub const AGE_KEY: &str = "edad";

/// Year used as "today" when computing vehicle antiquity.
/// Also the default vehicle year, so a missing year carries no surcharge.
pub const REFERENCE_YEAR: i32 = 2025;

/// Age assumed when none is supplied
pub const DEFAULT_AGE: i32 = 30;

/// Product line being quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyType {
    /// Vehicle coverage
    #[serde(rename = "auto")]
    Auto,
    /// Life coverage
    #[serde(rename = "vida")]
    Life,
}

impl PolicyType {
    /// All supported policy types
    pub const ALL: [PolicyType; 2] = [PolicyType::Auto, PolicyType::Life];

    /// Get the product label used by callers
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyType::Auto => "auto",
            PolicyType::Life => "vida",
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyType {
    type Err = QuoteError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "auto" => Ok(PolicyType::Auto),
            "vida" => Ok(PolicyType::Life),
            other => Err(QuoteError::unrecognized(other)),
        }
    }
}

/// Client attributes keyed by name.
///
/// Values are not validated. Formulas read the keys they understand and
/// substitute their own defaults for anything missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataRecord {
    values: BTreeMap<String, f64>,
}

impl DataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Get a value, falling back to `default` when the key is absent
    pub fn get_or(&self, key: &str, default: f64) -> f64 {
        self.get(key).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for DataRecord {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Typed input for auto quotes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoInput {
    /// Vehicle model year (None = reference year, no antiquity surcharge)
    #[serde(default)]
    pub vehicle_year: Option<i32>,
}

impl AutoInput {
    pub fn new(vehicle_year: i32) -> Self {
        Self { vehicle_year: Some(vehicle_year) }
    }

    /// Vehicle year with the default applied
    pub fn effective_vehicle_year(&self) -> i32 {
        self.vehicle_year.unwrap_or(REFERENCE_YEAR)
    }

    /// Read from a record. Non-integral years are truncated.
    pub fn from_record(record: &DataRecord) -> Self {
        Self {
            vehicle_year: record.get(VEHICLE_YEAR_KEY).map(|y| y as i32),
        }
    }
}

impl From<AutoInput> for DataRecord {
    fn from(input: AutoInput) -> Self {
        let mut record = DataRecord::new();
        if let Some(year) = input.vehicle_year {
            record.insert(VEHICLE_YEAR_KEY, year as f64);
        }
        record
    }
}

/// Typed input for life quotes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeInput {
    /// Age of the insured (None = DEFAULT_AGE)
    #[serde(default)]
    pub age: Option<i32>,
}

impl LifeInput {
    pub fn new(age: i32) -> Self {
        Self { age: Some(age) }
    }

    /// Age with the default applied
    pub fn effective_age(&self) -> i32 {
        self.age.unwrap_or(DEFAULT_AGE)
    }

    /// Read from a record. Non-integral ages are truncated.
    pub fn from_record(record: &DataRecord) -> Self {
        Self {
            age: record.get(AGE_KEY).map(|a| a as i32),
        }
    }
}

impl From<LifeInput> for DataRecord {
    fn from(input: LifeInput) -> Self {
        let mut record = DataRecord::new();
        if let Some(age) = input.age {
            record.insert(AGE_KEY, age as f64);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_type_labels() {
        assert_eq!("auto".parse::<PolicyType>(), Ok(PolicyType::Auto));
        assert_eq!("vida".parse::<PolicyType>(), Ok(PolicyType::Life));
        assert_eq!(PolicyType::Life.to_string(), "vida");

        // Labels are case-sensitive
        assert_eq!(
            "Auto".parse::<PolicyType>(),
            Err(QuoteError::UnrecognizedPolicyType("Auto".to_string()))
        );
        assert!("moto".parse::<PolicyType>().is_err());
    }

    #[test]
    fn test_policy_type_serde_uses_labels() {
        let json = serde_json::to_string(&PolicyType::Life).unwrap();
        assert_eq!(json, "\"vida\"");
        let parsed: PolicyType = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(parsed, PolicyType::Auto);
    }

    #[test]
    fn test_record_defaults() {
        let record = DataRecord::new().with(AGE_KEY, 40.0);
        assert_eq!(record.get(AGE_KEY), Some(40.0));
        assert_eq!(record.get(VEHICLE_YEAR_KEY), None);
        assert_eq!(record.get_or(VEHICLE_YEAR_KEY, 2025.0), 2025.0);
        assert_eq!(record.len(), 1);

        let collected: DataRecord = [(AGE_KEY, 40.0)].into_iter().collect();
        assert_eq!(collected, record);
    }

    #[test]
    fn test_record_is_flat_json_object() {
        let record: DataRecord = serde_json::from_str(r#"{"anio_auto": 2020, "color": 3}"#).unwrap();
        assert_eq!(record.get(VEHICLE_YEAR_KEY), Some(2020.0));
        assert_eq!(record.get("color"), Some(3.0));

        let keys: Vec<&str> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["anio_auto", "color"]);
    }

    #[test]
    fn test_typed_inputs_round_trip_through_record() {
        let auto: DataRecord = AutoInput::new(2018).into();
        assert_eq!(auto.get(VEHICLE_YEAR_KEY), Some(2018.0));
        assert_eq!(AutoInput::from_record(&auto), AutoInput::new(2018));

        // Absent field means absent key
        let empty: DataRecord = LifeInput::default().into();
        assert!(empty.is_empty());
        assert_eq!(LifeInput::from_record(&empty).effective_age(), DEFAULT_AGE);
        assert_eq!(AutoInput::default().effective_vehicle_year(), REFERENCE_YEAR);
    }
}
