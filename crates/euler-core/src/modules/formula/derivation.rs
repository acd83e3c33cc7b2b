use super::numeric::{FormattedMatrix, evaluate_composed_matrix};
use super::symbolic::{elementary_symbolic_matrix, format_composed_matrix};
use crate::common::config::ValidatedConfig;
use crate::common::constants::FRAME_LABELS;
use crate::domain::Vector3;
use crate::modules::sequence::RotationStep;
use crate::modules::serialization::{format_fixed_f64, format_plain_f64};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepInfo {
    pub axis_label: String,
    pub angle_text: String,
    pub conversion_text: String,
}

pub fn step_info(step: &RotationStep) -> StepInfo {
    StepInfo {
        axis_label: step.axis_label.to_string(),
        angle_text: format!(
            "{} = {}°",
            step.symbol,
            format_fixed_f64(step.angle_degrees, 0, 1)
        ),
        conversion_text: format!(
            "{} = {} R_{}({})",
            bold_triple(step.after_labels),
            bold_triple(step.before_labels),
            step.axis.lowercase(),
            step.symbol
        ),
    }
}

fn bold_triple(labels: [&str; 3]) -> String {
    format!(
        "(\\bm{{{}}}, \\bm{{{}}}, \\bm{{{}}})",
        labels[0], labels[1], labels[2]
    )
}

/// The LaTeX `align*` block walking from the initial frame to the numeric
/// composed matrix.
pub fn render_derivation(config: &ValidatedConfig) -> String {
    let basis = config.handedness.initial_basis();
    let axes = config.order.axes();
    let symbols = config.symbols.labels();
    let degrees = config.angles.degrees();

    let column = |axis: &Vector3| {
        format!(
            "({}, {}, {})^T",
            format_plain_f64(axis.x),
            format_plain_f64(axis.y),
            format_plain_f64(axis.z)
        )
    };
    let elementary = axes
        .iter()
        .zip(symbols.iter())
        .map(|(axis, symbol)| elementary_symbolic_matrix(*axis, symbol))
        .collect::<String>();
    let factors = axes
        .iter()
        .zip(symbols.iter())
        .map(|(axis, symbol)| format!("R_{}({})", axis.lowercase(), symbol))
        .collect::<Vec<_>>()
        .join("\n");
    let numeric = FormattedMatrix::new(&evaluate_composed_matrix(config.order, &config.angles));

    let initial = bold_triple(FRAME_LABELS[0]);
    let last = bold_triple(FRAME_LABELS[3]);
    let lines = [
        "\\begin{align*}".to_string(),
        format!("{initial} &="),
        format!("({},", column(&basis.e1)),
        format!("{},", column(&basis.e2)),
        format!("{}) \\\\", column(&basis.e3)),
        format!("({}, {}, {}) &=", symbols[0], symbols[1], symbols[2]),
        format!(
            "({}°, {}°, {}°) \\\\",
            format_plain_f64(degrees[0]),
            format_plain_f64(degrees[1]),
            format_plain_f64(degrees[2])
        ),
        last,
        format!("&= {initial}"),
        format!("{factors} \\\\"),
        "&=".to_string(),
        initial,
        format!("{elementary} \\\\"),
        format!(
            "&= {} \\\\",
            format_composed_matrix(config.order, &config.symbols)
        ),
        "&=".to_string(),
        numeric.latex(),
        "\\end{align*}".to_string(),
    ];
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::{render_derivation, step_info};
    use crate::common::config::ValidatedConfig;
    use crate::domain::{AngleTriple, Handedness, RotationOrder, SymbolTriple};
    use crate::modules::sequence::compose_sequence;

    #[test]
    fn step_rows_name_axis_angle_and_basis_change() {
        let config = ValidatedConfig {
            angles: AngleTriple::new([30.0, -0.0, 12.34]),
            ..ValidatedConfig::default()
        };
        let sequence = compose_sequence(
            &config.handedness.initial_basis(),
            config.order,
            &config.angles,
            &config.symbols,
        );

        let first = step_info(&sequence.steps[0]);
        assert_eq!(first.axis_label, "z");
        assert_eq!(first.angle_text, "\\alpha = 30.0°");
        assert_eq!(
            first.conversion_text,
            "(\\bm{x'}, \\bm{y'}, \\bm{z'}) = (\\bm{x}, \\bm{y}, \\bm{z}) R_z(\\alpha)"
        );

        let second = step_info(&sequence.steps[1]);
        assert_eq!(second.axis_label, "y'");
        assert_eq!(second.angle_text, "\\beta = 0.0°");

        let third = step_info(&sequence.steps[2]);
        assert_eq!(third.axis_label, "x''");
        assert_eq!(third.angle_text, "\\gamma = 12.3°");
        assert!(third.conversion_text.starts_with("(\\bm{X}, \\bm{Y}, \\bm{Z}) = (\\bm{x''}"));
    }

    #[test]
    fn derivation_lists_inputs_factors_and_results() {
        let config = ValidatedConfig {
            handedness: Handedness::Left,
            order: RotationOrder::Xyz,
            angles: AngleTriple::new([0.0, 90.0, -45.5]),
            symbols: SymbolTriple::new(["a", "b", "c"]),
        };
        let text = render_derivation(&config);

        assert!(text.starts_with("\\begin{align*}\n(\\bm{x}, \\bm{y}, \\bm{z}) &=\n"));
        assert!(text.contains("((1, 0, 0)^T,\n(0, -1, 0)^T,\n(0, 0, 1)^T) \\\\"));
        assert!(text.contains("(a, b, c) &=\n(0°, 90°, -45.5°) \\\\"));
        assert!(text.contains("&= (\\bm{x}, \\bm{y}, \\bm{z})\nR_x(a)\nR_y(b)\nR_z(c) \\\\"));
        assert!(text.contains("&= \\begin{pmatrix}\n\\cos b \\cos c &"));
        assert!(text.ends_with("\\end{pmatrix}\n\\end{align*}"));
    }
}
