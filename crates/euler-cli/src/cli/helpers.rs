use super::CliError;
use super::commands::InputFlags;
use anyhow::Context;
use euler_core::common::constants::FRAME_LABELS;
use euler_core::common::{ValidatedConfig, VisualizerConfig};
use euler_core::domain::{Basis, Vector3, resolve_symbol};
use euler_core::modules::serialization::{format_fixed_f64, to_pretty_json};
use euler_core::modules::{RotationSequence, step_info};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Serialize)]
pub(super) struct OrderEntry {
    pub(super) name: &'static str,
    pub(super) family: &'static str,
}

#[derive(Debug, Serialize)]
pub(super) struct SymbolEntry {
    pub(super) name: &'static str,
    pub(super) latex: &'static str,
}

/// Config file (or defaults), then flag overrides, then validation.
pub(super) fn load_validated_config(flags: &InputFlags) -> Result<ValidatedConfig, CliError> {
    let mut config = match &flags.config {
        Some(path) => VisualizerConfig::load(path)?,
        None => VisualizerConfig::default(),
    };

    if let Some(handedness) = &flags.handedness {
        config.handedness = handedness.clone();
    }
    if let Some(order) = &flags.order {
        config.order = order.clone();
    }
    if let Some(angles) = &flags.angles {
        config.angles = angles.clone();
    }
    if let Some(symbols) = &flags.symbols {
        config.symbols = symbols
            .iter()
            .map(|symbol| resolve_symbol(symbol))
            .collect();
    }
    debug!(?config, "resolved command-line configuration");

    config.validate().map_err(CliError::from)
}

pub(super) fn emit(text: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => fs::write(path, format!("{text}\n"))
            .with_context(|| format!("failed to write '{}'", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}").context("failed to write to stdout")?;
        }
    }
    Ok(())
}

pub(super) fn emit_json<T: Serialize + ?Sized>(
    value: &T,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let json = to_pretty_json(value).map_err(CliError::Compute)?;
    emit(&json, output)
}

fn format_vector(vector: &Vector3) -> String {
    format!(
        "({}, {}, {})",
        format_fixed_f64(vector.x, 10, 7),
        format_fixed_f64(vector.y, 10, 7),
        format_fixed_f64(vector.z, 10, 7)
    )
}

fn frame_lines(labels: [&str; 3], basis: &Basis) -> [String; 3] {
    let axes = basis.axes();
    [0, 1, 2].map(|index| {
        let vector = format_vector(&axes[index]);
        format!("  {:<3} = {vector}", labels[index])
    })
}

pub(super) fn render_sequence_text(
    config: &ValidatedConfig,
    sequence: &RotationSequence,
) -> String {
    let mut lines = vec![
        format!(
            "{} rotation of the {}-handed frame",
            config.order,
            config.handedness.as_str()
        ),
        "initial frame".to_string(),
    ];
    lines.extend(frame_lines(FRAME_LABELS[0], &sequence.initial_basis));

    for step in &sequence.steps {
        let info = step_info(step);
        lines.push(format!(
            "step {}: about {} by {}",
            step.index + 1,
            info.axis_label,
            info.angle_text
        ));
        lines.push(format!("  {}", info.conversion_text));
        lines.extend(frame_lines(step.after_labels, &step.after));
    }
    lines.join("\n")
}
