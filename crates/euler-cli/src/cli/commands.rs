use super::CliError;
use super::helpers::*;
use euler_core::domain::{RotationOrder, SymbolPreset, matrix_rows};
use euler_core::modules::{
    FormattedMatrix, RenderState, build_scenes, compose_sequence, elementary_symbolic_matrix,
    evaluate_composed_matrix, format_composed_matrix, render_derivation,
};
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct InputFlags {
    /// JSON configuration file; the flags below override its values
    #[arg(long, value_name = "PATH")]
    pub(super) config: Option<PathBuf>,

    /// Handedness of the initial frame (right or left)
    #[arg(long)]
    pub(super) handedness: Option<String>,

    /// Rotation order such as ZYX or ZXZ
    #[arg(long)]
    pub(super) order: Option<String>,

    /// The three rotation angles in degrees
    #[arg(long, num_args = 1.., value_name = "DEG", allow_negative_numbers = true)]
    pub(super) angles: Option<Vec<f64>>,

    /// The three angle symbols, as LaTeX or a preset name (alpha, roll, theta_x, ...)
    #[arg(long, num_args = 1.., value_name = "SYMBOL")]
    pub(super) symbols: Option<Vec<String>>,
}

#[derive(clap::Args)]
pub(super) struct ComposeArgs {
    #[command(flatten)]
    input: InputFlags,

    /// Print the sequence as JSON
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args)]
pub(super) struct MatrixArgs {
    #[command(flatten)]
    input: InputFlags,

    /// Print the bracketed clipboard literal
    #[arg(long, conflicts_with = "json")]
    literal: bool,

    /// Print the raw matrix rows as JSON
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args)]
pub(super) struct FormulaArgs {
    #[command(flatten)]
    input: InputFlags,

    /// Print the three elementary matrices instead of their product
    #[arg(long)]
    elementary: bool,
}

#[derive(clap::Args)]
pub(super) struct DeriveArgs {
    #[command(flatten)]
    input: InputFlags,

    /// Write to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct SceneArgs {
    #[command(flatten)]
    input: InputFlags,

    /// Write to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct RenderArgs {
    #[command(flatten)]
    input: InputFlags,

    /// Write to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct ListArgs {
    /// Print the listing as JSON
    #[arg(long)]
    json: bool,
}

pub(super) fn run_compose_command(args: ComposeArgs) -> Result<i32, CliError> {
    let config = load_validated_config(&args.input)?;
    let sequence = compose_sequence(
        &config.handedness.initial_basis(),
        config.order,
        &config.angles,
        &config.symbols,
    );

    if args.json {
        emit_json(&sequence, None)?;
    } else {
        emit(&render_sequence_text(&config, &sequence), None)?;
    }
    Ok(0)
}

pub(super) fn run_matrix_command(args: MatrixArgs) -> Result<i32, CliError> {
    let config = load_validated_config(&args.input)?;
    let matrix = evaluate_composed_matrix(config.order, &config.angles);

    if args.json {
        return emit_json(&matrix_rows(&matrix), None).map(|_| 0);
    }
    let formatted = FormattedMatrix::new(&matrix);
    let text = if args.literal {
        formatted.literal()
    } else {
        formatted.display_text()
    };
    emit(&text, None)?;
    Ok(0)
}

pub(super) fn run_formula_command(args: FormulaArgs) -> Result<i32, CliError> {
    let config = load_validated_config(&args.input)?;

    let text = if args.elementary {
        config
            .order
            .axes()
            .iter()
            .zip(config.symbols.labels())
            .map(|(axis, symbol)| elementary_symbolic_matrix(*axis, symbol))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        format_composed_matrix(config.order, &config.symbols)
    };
    emit(&text, None)?;
    Ok(0)
}

pub(super) fn run_derive_command(args: DeriveArgs) -> Result<i32, CliError> {
    let config = load_validated_config(&args.input)?;
    emit(&render_derivation(&config), args.output.as_deref())?;
    Ok(0)
}

pub(super) fn run_scene_command(args: SceneArgs) -> Result<i32, CliError> {
    let config = load_validated_config(&args.input)?;
    let sequence = compose_sequence(
        &config.handedness.initial_basis(),
        config.order,
        &config.angles,
        &config.symbols,
    );
    emit_json(&build_scenes(&sequence), args.output.as_deref())?;
    Ok(0)
}

pub(super) fn run_render_command(args: RenderArgs) -> Result<i32, CliError> {
    let config = load_validated_config(&args.input)?;
    let state = RenderState::compute(config);
    emit_json(&state, args.output.as_deref())?;
    Ok(0)
}

pub(super) fn run_orders_command(args: ListArgs) -> Result<i32, CliError> {
    let entries = RotationOrder::ALL
        .iter()
        .map(|order| OrderEntry {
            name: order.as_str(),
            family: if order.is_proper_euler() {
                "proper-euler"
            } else {
                "tait-bryan"
            },
        })
        .collect::<Vec<_>>();

    if args.json {
        emit_json(&entries, None)?;
    } else {
        let text = entries
            .iter()
            .map(|entry| format!("{}  {}", entry.name, entry.family))
            .collect::<Vec<_>>()
            .join("\n");
        emit(&text, None)?;
    }
    Ok(0)
}

pub(super) fn run_symbols_command(args: ListArgs) -> Result<i32, CliError> {
    let entries = SymbolPreset::ALL
        .iter()
        .map(|preset| SymbolEntry {
            name: preset.name(),
            latex: preset.latex(),
        })
        .collect::<Vec<_>>();

    if args.json {
        emit_json(&entries, None)?;
    } else {
        let width = entries
            .iter()
            .map(|entry| entry.name.len())
            .max()
            .unwrap_or(0);
        let text = entries
            .iter()
            .map(|entry| format!("{:<width$}  {}", entry.name, entry.latex))
            .collect::<Vec<_>>()
            .join("\n");
        emit(&text, None)?;
    }
    Ok(0)
}
