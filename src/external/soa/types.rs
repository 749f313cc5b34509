use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// The three datasets served by the data API.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Dataset {
    Topics,
    CovidWorld,
    CovidBarcelona,
}

impl Dataset {
    pub const ALL: [Dataset; 3] = [
        Dataset::Topics,
        Dataset::CovidWorld,
        Dataset::CovidBarcelona,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Topics => "topics",
            Dataset::CovidWorld => "covid-world",
            Dataset::CovidBarcelona => "covid-barcelona",
        }
    }

    /// Path the data router binds for this dataset.
    pub fn route(&self) -> &'static str {
        match self {
            Dataset::Topics => "/data/topics",
            Dataset::CovidWorld => "/data/covid/world",
            Dataset::CovidBarcelona => "/data/covid/barcelona",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_value_enum_names_match_display() {
        for dataset in Dataset::ALL {
            let parsed = Dataset::from_str(dataset.as_str(), false).unwrap();
            assert_eq!(parsed, dataset);
        }
    }

    #[test]
    fn test_routes_are_distinct() {
        let routes: std::collections::HashSet<_> =
            Dataset::ALL.iter().map(Dataset::route).collect();
        assert_eq!(routes.len(), 3);
        assert!(routes.iter().all(|r| r.starts_with("/data/")));
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Dataset::CovidBarcelona).unwrap();
        assert_eq!(json, "\"covid-barcelona\"");
    }
}
