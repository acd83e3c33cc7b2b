//! Visualizer configuration file format and its validation.

use super::constants::NOMINAL_ANGLE_LIMIT_DEGREES;
use crate::domain::{
    AngleTriple, ConfigError, ConfigResult, Handedness, RotationOrder, SymbolPreset, SymbolTriple,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisualizerConfig {
    pub handedness: String,
    pub order: String,
    pub angles: Vec<f64>,
    pub symbols: Vec<String>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            handedness: Handedness::Right.as_str().to_string(),
            order: RotationOrder::Zyx.as_str().to_string(),
            angles: vec![0.0; 3],
            symbols: default_symbols(),
        }
    }
}

impl VisualizerConfig {
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason: source.to_string(),
        })?;
        Self::from_json(&content).map_err(|error| match error {
            ConfigError::Malformed { reason, .. } => ConfigError::Malformed {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    pub fn from_json(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|source| ConfigError::Malformed {
            path: "<inline>".to_string(),
            reason: source.to_string(),
        })
    }

    pub fn validate(&self) -> ConfigResult<ValidatedConfig> {
        let handedness = self.handedness.parse::<Handedness>()?;
        let order = self.order.parse::<RotationOrder>()?;

        let angles: [f64; 3] = self
            .angles
            .as_slice()
            .try_into()
            .map_err(|_| ConfigError::AngleCount(self.angles.len()))?;
        for (index, value) in angles.iter().copied().enumerate() {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteAngle { index, value });
            }
            if value.abs() > NOMINAL_ANGLE_LIMIT_DEGREES {
                warn!(
                    index,
                    value, "angle is outside the nominal [-360, 360] range; using it as given"
                );
            }
        }

        let symbols: [String; 3] = self
            .symbols
            .clone()
            .try_into()
            .map_err(|rejected: Vec<String>| ConfigError::SymbolCount(rejected.len()))?;

        Ok(ValidatedConfig {
            handedness,
            order,
            angles: AngleTriple::new(angles),
            symbols: SymbolTriple::new(symbols),
        })
    }
}

pub fn default_symbols() -> Vec<String> {
    [SymbolPreset::Alpha, SymbolPreset::Beta, SymbolPreset::Gamma]
        .iter()
        .map(|preset| preset.latex().to_string())
        .collect()
}

/// A configuration that passed every precondition check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedConfig {
    pub handedness: Handedness,
    pub order: RotationOrder,
    pub angles: AngleTriple,
    pub symbols: SymbolTriple,
}

impl Default for ValidatedConfig {
    fn default() -> Self {
        Self {
            handedness: Handedness::Right,
            order: RotationOrder::Zyx,
            angles: AngleTriple::ZERO,
            symbols: SymbolTriple::default(),
        }
    }
}
