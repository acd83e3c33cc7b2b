use crate::domain::{Axis, Basis, Matrix3, matrix_from_rows};

/// Standard right-handed rotation matrix about `axis` by `angle` radians.
pub fn build_elementary_rotation(axis: Axis, angle: f64) -> Matrix3 {
    let (sin, cos) = angle.sin_cos();
    match axis {
        Axis::X => matrix_from_rows([[1.0, 0.0, 0.0], [0.0, cos, -sin], [0.0, sin, cos]]),
        Axis::Y => matrix_from_rows([[cos, 0.0, sin], [0.0, 1.0, 0.0], [-sin, 0.0, cos]]),
        Axis::Z => matrix_from_rows([[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]]),
    }
}

/// Expresses each new axis as a combination of the old ones:
/// `new_e[j] = sum_i M[i][j] * e[i]`, i.e. the basis (as columns) times `M`.
pub fn change_basis(basis: &Basis, matrix: &Matrix3) -> Basis {
    let changed = Matrix3::from_columns(&basis.axes()) * matrix;
    Basis::new(
        changed.column(0).into_owned(),
        changed.column(1).into_owned(),
        changed.column(2).into_owned(),
    )
}

/// Rotates `basis` about its own `axis` by `angle` radians.
pub fn rotate_basis(basis: &Basis, axis: Axis, angle: f64) -> Basis {
    change_basis(basis, &build_elementary_rotation(axis, angle))
}

#[cfg(test)]
mod tests {
    use super::{build_elementary_rotation, change_basis, rotate_basis};
    use crate::domain::{Axis, Basis, Matrix3, Vector3, matrix_from_rows};
    use std::f64::consts::FRAC_PI_2;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn zero_angle_yields_identity_entries() {
        for axis in Axis::ALL {
            let matrix = build_elementary_rotation(axis, 0.0);
            assert_eq!(matrix, Matrix3::identity());
        }
    }

    #[test]
    fn quarter_turn_about_z_maps_x_to_y() {
        let matrix = build_elementary_rotation(Axis::Z, FRAC_PI_2);
        let expected = matrix_from_rows([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!((matrix - expected).amax() <= 1.0e-12);

        let rotated = change_basis(&Basis::RIGHT_HANDED, &matrix);
        assert!((rotated.e1 - Vector3::new(0.0, 1.0, 0.0)).amax() <= 1.0e-12);
        assert!((rotated.e2 - Vector3::new(-1.0, 0.0, 0.0)).amax() <= 1.0e-12);
        assert_eq!(rotated.e3, Basis::RIGHT_HANDED.e3);
    }

    #[test]
    fn rotation_axis_of_the_frame_is_fixed() {
        let angle = 0.7;
        let rotated = rotate_basis(&Basis::RIGHT_HANDED, Axis::Y, angle);
        assert_eq!(rotated.e2, Basis::RIGHT_HANDED.e2);
        assert_close(rotated.e1.x, angle.cos(), 1.0e-15);
        assert_close(rotated.e1.z, -angle.sin(), 1.0e-15);
    }

    #[test]
    fn change_basis_uses_matrix_columns() {
        let basis = Basis::new(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 2.0, 0.0),
            Vector3::new(0.0, 0.0, 3.0),
        );
        let matrix = matrix_from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let changed = change_basis(&basis, &matrix);
        assert_eq!(changed.e1, Vector3::new(1.0, 8.0, 21.0));
        assert_eq!(changed.e2, Vector3::new(2.0, 10.0, 24.0));
        assert_eq!(changed.e3, Vector3::new(3.0, 12.0, 27.0));
    }

    #[test]
    fn left_handed_frame_rotates_about_its_own_axes() {
        let rotated = rotate_basis(&Basis::LEFT_HANDED, Axis::X, FRAC_PI_2);
        assert_eq!(rotated.e1, Basis::LEFT_HANDED.e1);
        assert!((rotated.e2 - Vector3::new(0.0, 0.0, 1.0)).amax() <= 1.0e-12);
        assert!((rotated.e3 - Vector3::new(0.0, 1.0, 0.0)).amax() <= 1.0e-12);
        assert!(rotated.is_orthonormal(1.0e-12));
        assert_eq!(rotated.orientation(), -1.0);
    }
}
