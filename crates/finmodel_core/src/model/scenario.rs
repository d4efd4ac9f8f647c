use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Named variant of an assumption set
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioType {
    #[default]
    Base,
    Best,
    Worst,
    /// Pass-through hook; callers apply their own `ScenarioAdjustment`
    Custom,
}

impl ScenarioType {
    /// The three canonical scenarios, in comparison order
    pub const COMPARED: [ScenarioType; 3] =
        [ScenarioType::Best, ScenarioType::Base, ScenarioType::Worst];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioType::Base => "base",
            ScenarioType::Best => "best",
            ScenarioType::Worst => "worst",
            ScenarioType::Custom => "custom",
        }
    }

    /// Capitalised label for tables
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ScenarioType::Base => "Base",
            ScenarioType::Best => "Best",
            ScenarioType::Worst => "Worst",
            ScenarioType::Custom => "Custom",
        }
    }
}

impl fmt::Display for ScenarioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" => Ok(ScenarioType::Base),
            "best" => Ok(ScenarioType::Best),
            "worst" => Ok(ScenarioType::Worst),
            "custom" => Ok(ScenarioType::Custom),
            _ => Err(ValidationError::UnknownScenario(s.to_string())),
        }
    }
}

/// Multipliers applied to the unit economics of an assumption set
///
/// Funding, capex, tax, depreciation and starting cash are never touched;
/// scenarios only move growth and cost ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAdjustment {
    pub revenue_growth_rate: f64,
    pub cogs_percent: f64,
    pub opex_variable_percent: f64,
    pub opex_fixed: f64,
}

impl Default for ScenarioAdjustment {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ScenarioAdjustment {
    pub const IDENTITY: ScenarioAdjustment = ScenarioAdjustment {
        revenue_growth_rate: 1.0,
        cogs_percent: 1.0,
        opex_variable_percent: 1.0,
        opex_fixed: 1.0,
    };

    /// Higher growth, better unit economics
    pub const BEST: ScenarioAdjustment = ScenarioAdjustment {
        revenue_growth_rate: 1.5,
        cogs_percent: 0.9,
        opex_variable_percent: 0.9,
        opex_fixed: 1.0,
    };

    /// Lower growth, worse unit economics, higher fixed costs
    pub const WORST: ScenarioAdjustment = ScenarioAdjustment {
        revenue_growth_rate: 0.5,
        cogs_percent: 1.2,
        opex_variable_percent: 1.2,
        opex_fixed: 1.1,
    };

    /// Fixed multiplier table for a scenario
    #[must_use]
    pub fn for_scenario(scenario: ScenarioType) -> Self {
        match scenario {
            ScenarioType::Best => Self::BEST,
            ScenarioType::Worst => Self::WORST,
            ScenarioType::Base | ScenarioType::Custom => Self::IDENTITY,
        }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("BEST".parse::<ScenarioType>().unwrap(), ScenarioType::Best);
        assert_eq!(" worst ".parse::<ScenarioType>().unwrap(), ScenarioType::Worst);
    }

    #[test]
    fn test_parse_unknown_fails() {
        let err = "optimistic".parse::<ScenarioType>().unwrap_err();
        assert_eq!(err.field(), "scenario");
        assert!(matches!(err, ValidationError::UnknownScenario(name) if name == "optimistic"));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ScenarioType::Worst).unwrap();
        assert_eq!(json, "\"worst\"");
        let parsed: ScenarioType = serde_json::from_str("\"custom\"").unwrap();
        assert_eq!(parsed, ScenarioType::Custom);
        assert!(serde_json::from_str::<ScenarioType>("\"median\"").is_err());
    }

    #[test]
    fn test_multiplier_table() {
        assert!(ScenarioAdjustment::for_scenario(ScenarioType::Base).is_identity());
        assert!(ScenarioAdjustment::for_scenario(ScenarioType::Custom).is_identity());
        assert_eq!(
            ScenarioAdjustment::for_scenario(ScenarioType::Worst).opex_fixed,
            1.1
        );
        assert_eq!(
            ScenarioAdjustment::for_scenario(ScenarioType::Best).revenue_growth_rate,
            1.5
        );
    }
}
