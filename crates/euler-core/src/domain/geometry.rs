use serde::{Serialize, Serializer};

pub type Vector3 = nalgebra::Vector3<f64>;
pub type Matrix3 = nalgebra::Matrix3<f64>;

pub fn matrix_from_rows(rows: [[f64; 3]; 3]) -> Matrix3 {
    let [[m11, m12, m13], [m21, m22, m23], [m31, m32, m33]] = rows;
    Matrix3::new(m11, m12, m13, m21, m22, m23, m31, m32, m33)
}

/// Row-major copy; `rows[r][c]` is the element at row `r`, column `c`.
pub fn matrix_rows(matrix: &Matrix3) -> [[f64; 3]; 3] {
    [0, 1, 2].map(|r| [0, 1, 2].map(|c| matrix[(r, c)]))
}

/// Serializes a matrix as nested rows instead of nalgebra's flat column-major storage.
pub fn serialize_rows<S: Serializer>(matrix: &Matrix3, serializer: S) -> Result<S::Ok, S::Error> {
    matrix_rows(matrix).serialize(serializer)
}

/// An ordered triple of frame axes `(e1, e2, e3)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Basis {
    pub e1: Vector3,
    pub e2: Vector3,
    pub e3: Vector3,
}

impl Basis {
    pub const RIGHT_HANDED: Self = Self::new(
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    );

    pub const LEFT_HANDED: Self = Self::new(
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, -1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    );

    pub const fn new(e1: Vector3, e2: Vector3, e3: Vector3) -> Self {
        Self { e1, e2, e3 }
    }

    pub const fn axes(&self) -> [Vector3; 3] {
        [self.e1, self.e2, self.e3]
    }

    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        self.axes()
            .iter()
            .zip(other.axes().iter())
            .map(|(a, b)| (a - b).amax())
            .fold(0.0, f64::max)
    }

    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.max_abs_diff(other) <= tolerance
    }

    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        let [e1, e2, e3] = self.axes();
        [e1, e2, e3]
            .iter()
            .all(|axis| (axis.norm() - 1.0).abs() <= tolerance)
            && e1.dot(&e2).abs() <= tolerance
            && e2.dot(&e3).abs() <= tolerance
            && e1.dot(&e3).abs() <= tolerance
    }

    /// Sign of the triple product `e1 . (e2 x e3)`: +1 right-handed, -1 left-handed.
    pub fn orientation(&self) -> f64 {
        self.e1.dot(&self.e2.cross(&self.e3)).signum()
    }
}
