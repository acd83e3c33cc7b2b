use crate::common::constants::MATRIX_DIGITS;
use crate::domain::{AngleTriple, Matrix3, RotationOrder, matrix_rows};
use crate::modules::serialization::format_fixed_f64;
use crate::numerics::build_elementary_rotation;

/// `R(order[0], a0) * (R(order[1], a1) * R(order[2], a2))`, grouped to the right.
pub fn evaluate_composed_matrix(order: RotationOrder, angles: &AngleTriple) -> Matrix3 {
    let [first, second, third] = order.axes();
    let [a0, a1, a2] = angles.radians();
    let inner = build_elementary_rotation(second, a1) * build_elementary_rotation(third, a2);
    build_elementary_rotation(first, a0) * inner
}

/// Matrix entries rendered with a fixed number of fractional digits, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedMatrix {
    entries: [[String; 3]; 3],
}

impl FormattedMatrix {
    pub fn new(matrix: &Matrix3) -> Self {
        Self::with_digits(matrix, MATRIX_DIGITS)
    }

    pub fn with_digits(matrix: &Matrix3, digits: usize) -> Self {
        Self {
            entries: matrix_rows(matrix)
                .map(|row| row.map(|value| format_fixed_f64(value, 0, digits))),
        }
    }

    pub fn entries(&self) -> &[[String; 3]; 3] {
        &self.entries
    }

    /// `a, b, c / d, e, f / g, h, i`
    pub fn display_text(&self) -> String {
        self.entries
            .iter()
            .map(|row| row.join(", "))
            .collect::<Vec<_>>()
            .join(" / ")
    }

    /// Nested bracketed literal for clipboard export.
    pub fn literal(&self) -> String {
        let rows = self
            .entries
            .iter()
            .map(|row| format!("[{}]", row.join(", ")))
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{rows}]")
    }

    pub fn latex(&self) -> String {
        let rows = self
            .entries
            .iter()
            .map(|row| row.join(" & "))
            .collect::<Vec<_>>()
            .join(" \\\\\n");
        format!("\\begin{{pmatrix}}\n{rows}\n\\end{{pmatrix}}")
    }
}
