use crate::common::constants::FRAME_LABELS;
use crate::domain::{AngleTriple, Axis, Basis, Matrix3, RotationOrder, SymbolTriple, serialize_rows};
use crate::numerics::{build_elementary_rotation, change_basis};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationStep {
    pub index: usize,
    pub axis: Axis,
    pub angle_degrees: f64,
    pub angle_radians: f64,
    pub symbol: String,
    #[serde(serialize_with = "serialize_rows")]
    pub matrix: Matrix3,
    pub before: Basis,
    pub after: Basis,
    /// Label of the rotation axis inside the frame active before this step.
    pub axis_label: &'static str,
    pub before_labels: [&'static str; 3],
    pub after_labels: [&'static str; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationSequence {
    pub order: RotationOrder,
    pub initial_basis: Basis,
    pub steps: [RotationStep; 3],
    pub final_basis: Basis,
}

impl RotationSequence {
    /// Initial frame, the two intermediate frames, then the final frame.
    pub fn frames(&self) -> [Basis; 4] {
        [
            self.initial_basis,
            self.steps[0].after,
            self.steps[1].after,
            self.final_basis,
        ]
    }
}

pub fn compose_sequence(
    initial_basis: &Basis,
    order: RotationOrder,
    angles: &AngleTriple,
    symbols: &SymbolTriple,
) -> RotationSequence {
    let axes = order.axes();
    let degrees = angles.degrees();
    let radians = angles.radians();

    let step = |index: usize, before: Basis| {
        let axis = axes[index];
        let matrix = build_elementary_rotation(axis, radians[index]);
        let after = change_basis(&before, &matrix);
        debug!(
            step = index + 1,
            axis = axis.as_str(),
            degrees = degrees[index],
            "applied intrinsic rotation"
        );
        RotationStep {
            index,
            axis,
            angle_degrees: degrees[index],
            angle_radians: radians[index],
            symbol: symbols.get(index).to_string(),
            matrix,
            before,
            after,
            axis_label: FRAME_LABELS[index][axis.index()],
            before_labels: FRAME_LABELS[index],
            after_labels: FRAME_LABELS[index + 1],
        }
    };

    let first = step(0, *initial_basis);
    let second = step(1, first.after);
    let third = step(2, second.after);
    let final_basis = third.after;

    RotationSequence {
        order,
        initial_basis: *initial_basis,
        steps: [first, second, third],
        final_basis,
    }
}
