use super::formula::{
    FormattedMatrix, StepInfo, evaluate_composed_matrix, format_composed_matrix, render_derivation,
    step_info,
};
use super::scene::{SceneSet, build_scenes};
use super::sequence::{RotationSequence, compose_sequence};
use crate::common::config::{ValidatedConfig, VisualizerConfig, default_symbols};
use crate::domain::{ConfigError, ConfigResult, Matrix3, serialize_rows};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderState {
    pub config: ValidatedConfig,
    pub sequence: RotationSequence,
    pub step_infos: [StepInfo; 3],
    pub scenes: SceneSet,
    #[serde(serialize_with = "serialize_rows")]
    pub composed_matrix: Matrix3,
    pub symbolic_matrix: String,
    pub numeric_matrix: String,
    pub clipboard_text: String,
    pub derivation: String,
}

impl RenderState {
    pub fn compute(config: ValidatedConfig) -> Self {
        let sequence = compose_sequence(
            &config.handedness.initial_basis(),
            config.order,
            &config.angles,
            &config.symbols,
        );
        let step_infos = [
            step_info(&sequence.steps[0]),
            step_info(&sequence.steps[1]),
            step_info(&sequence.steps[2]),
        ];
        let scenes = build_scenes(&sequence);
        let composed_matrix = evaluate_composed_matrix(config.order, &config.angles);
        let formatted = FormattedMatrix::new(&composed_matrix);
        let symbolic_matrix = format_composed_matrix(config.order, &config.symbols);
        let derivation = render_derivation(&config);

        Self {
            sequence,
            step_infos,
            scenes,
            composed_matrix,
            symbolic_matrix,
            numeric_matrix: formatted.display_text(),
            clipboard_text: formatted.literal(),
            derivation,
            config,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputChange {
    Handedness(String),
    Order(String),
    Angle { index: usize, degrees: f64 },
    Angles(Vec<f64>),
    Symbol { index: usize, symbol: String },
    Symbols(Vec<String>),
    ResetAngles,
    ResetSymbols,
}

#[derive(Debug, Clone)]
pub struct VisualizerSession {
    config: VisualizerConfig,
    state: Option<RenderState>,
}

impl Default for VisualizerSession {
    fn default() -> Self {
        Self {
            state: Some(RenderState::compute(ValidatedConfig::default())),
            config: VisualizerConfig::default(),
        }
    }
}

impl VisualizerSession {
    /// Starts a session from raw inputs; the first render happens immediately.
    pub fn new(config: VisualizerConfig) -> (Self, ConfigResult<()>) {
        let mut session = Self {
            config,
            state: None,
        };
        let outcome = session.recompute().map(|_| ());
        (session, outcome)
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// The current render state, or `None` while the configuration is invalid.
    pub fn state(&self) -> Option<&RenderState> {
        self.state.as_ref()
    }

    /// A slot index outside `0..3` is rejected without touching the
    /// configuration or the current render state.
    pub fn apply(&mut self, change: InputChange) -> ConfigResult<&RenderState> {
        debug!(?change, "input changed");
        match change {
            InputChange::Handedness(value) => self.config.handedness = value,
            InputChange::Order(value) => self.config.order = value,
            InputChange::Angle { index, degrees } => {
                *slot_mut(&mut self.config.angles, index)? = degrees;
            }
            InputChange::Angles(values) => self.config.angles = values,
            InputChange::Symbol { index, symbol } => {
                *slot_mut(&mut self.config.symbols, index)? = symbol;
            }
            InputChange::Symbols(values) => self.config.symbols = values,
            InputChange::ResetAngles => self.config.angles = vec![0.0; 3],
            InputChange::ResetSymbols => self.config.symbols = default_symbols(),
        }
        self.recompute()
    }

    fn recompute(&mut self) -> ConfigResult<&RenderState> {
        self.state = None;
        let validated = self.config.validate()?;
        debug!(
            order = validated.order.as_str(),
            handedness = validated.handedness.as_str(),
            "recomputing render state"
        );
        Ok(self.state.insert(RenderState::compute(validated)))
    }
}

fn slot_mut<T>(values: &mut [T], index: usize) -> ConfigResult<&mut T> {
    if index >= 3 {
        return Err(ConfigError::IndexOutOfRange(index));
    }
    values
        .get_mut(index)
        .ok_or(ConfigError::IndexOutOfRange(index))
}

#[cfg(test)]
mod tests {
    use super::{InputChange, RenderState, VisualizerSession};
    use crate::common::config::{ValidatedConfig, VisualizerConfig};
    use crate::domain::{Basis, ConfigError, RotationOrder};

    #[test]
    fn default_session_renders_identity() {
        let session = VisualizerSession::default();
        let state = session.state().expect("default state should render");
        assert_eq!(state.sequence.final_basis, Basis::RIGHT_HANDED);
        assert_eq!(
            state.clipboard_text,
            "[[1.0000000, 0.0000000, 0.0000000], [0.0000000, 1.0000000, 0.0000000], [0.0000000, 0.0000000, 1.0000000]]"
        );
    }

    #[test]
    fn each_change_rebuilds_the_state() {
        let mut session = VisualizerSession::default();
        let state = session
            .apply(InputChange::Order("XYZ".to_string()))
            .expect("valid order");
        assert_eq!(state.config.order, RotationOrder::Xyz);

        let state = session
            .apply(InputChange::Angle {
                index: 2,
                degrees: 90.0,
            })
            .expect("valid angle");
        assert_eq!(state.config.angles.degrees(), [0.0, 0.0, 90.0]);
        assert_eq!(state.step_infos[2].angle_text, "\\gamma = 90.0°");

        let fresh = RenderState::compute(state.config.clone());
        assert_eq!(session.state(), Some(&fresh));
    }

    #[test]
    fn invalid_input_blocks_rendering_until_fixed() {
        let mut session = VisualizerSession::default();
        let error = session
            .apply(InputChange::Order("XYQ".to_string()))
            .expect_err("bad axis should be rejected");
        assert_eq!(error, ConfigError::UnknownAxis("Q".to_string()));
        assert!(session.state().is_none());

        session
            .apply(InputChange::Order("ZXZ".to_string()))
            .expect("order should be accepted again");
        assert!(session.state().is_some());
    }

    #[test]
    fn out_of_range_slot_is_rejected_and_state_kept() {
        let mut session = VisualizerSession::default();
        let before = session.state().cloned();

        let error = session
            .apply(InputChange::Angle {
                index: 3,
                degrees: 45.0,
            })
            .expect_err("index 3 should be rejected");
        assert_eq!(error, ConfigError::IndexOutOfRange(3));

        let error = session
            .apply(InputChange::Symbol {
                index: 7,
                symbol: "x".to_string(),
            })
            .expect_err("index 7 should be rejected");
        assert_eq!(error, ConfigError::IndexOutOfRange(7));

        assert_eq!(session.config(), &VisualizerConfig::default());
        assert_eq!(session.state().cloned(), before);
        assert!(before.is_some());
    }

    #[test]
    fn resets_restore_defaults() {
        let config = VisualizerConfig {
            angles: vec![10.0, 20.0, 30.0],
            symbols: vec!["a".into(), "b".into(), "c".into()],
            ..VisualizerConfig::default()
        };
        let (mut session, outcome) = VisualizerSession::new(config);
        assert!(outcome.is_ok());

        session.apply(InputChange::ResetAngles).expect("reset angles");
        let state = session.apply(InputChange::ResetSymbols).expect("reset symbols");
        assert_eq!(state.config, ValidatedConfig::default());
    }

    #[test]
    fn invalid_initial_config_starts_blocked() {
        let config = VisualizerConfig {
            handedness: "sideways".to_string(),
            ..VisualizerConfig::default()
        };
        let (session, outcome) = VisualizerSession::new(config);
        assert!(matches!(outcome, Err(ConfigError::UnknownHandedness(_))));
        assert!(session.state().is_none());
    }
}
