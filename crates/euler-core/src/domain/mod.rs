pub mod errors;
pub mod geometry;

pub use errors::{ConfigError, ConfigResult, EulerError, EulerErrorCategory, EulerResult};
pub use geometry::{Basis, Matrix3, Vector3, matrix_from_rows, matrix_rows, serialize_rows};

use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        }
    }

    pub const fn lowercase(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }

    /// Position of this axis inside a basis triple.
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Only the upper-case letters `X`, `Y` and `Z` name an axis.
    pub fn from_char(c: char) -> ConfigResult<Self> {
        match c {
            'X' => Ok(Self::X),
            'Y' => Ok(Self::Y),
            'Z' => Ok(Self::Z),
            _ => Err(ConfigError::UnknownAxis(c.to_string())),
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for Axis {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(ConfigError::UnknownAxis(s.to_string())),
        }
    }
}

/// The twelve recognized rotation sequences: six proper Euler orders
/// followed by six Tait-Bryan orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationOrder {
    Xyx,
    Xzx,
    Yxy,
    Yzy,
    Zxz,
    Zyz,
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    Zxy,
    Zyx,
}

impl RotationOrder {
    pub const ALL: [Self; 12] = [
        Self::Xyx,
        Self::Xzx,
        Self::Yxy,
        Self::Yzy,
        Self::Zxz,
        Self::Zyz,
        Self::Xyz,
        Self::Xzy,
        Self::Yxz,
        Self::Yzx,
        Self::Zxy,
        Self::Zyx,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xyx => "XYX",
            Self::Xzx => "XZX",
            Self::Yxy => "YXY",
            Self::Yzy => "YZY",
            Self::Zxz => "ZXZ",
            Self::Zyz => "ZYZ",
            Self::Xyz => "XYZ",
            Self::Xzy => "XZY",
            Self::Yxz => "YXZ",
            Self::Yzx => "YZX",
            Self::Zxy => "ZXY",
            Self::Zyx => "ZYX",
        }
    }

    pub const fn axes(self) -> [Axis; 3] {
        use Axis::{X, Y, Z};
        match self {
            Self::Xyx => [X, Y, X],
            Self::Xzx => [X, Z, X],
            Self::Yxy => [Y, X, Y],
            Self::Yzy => [Y, Z, Y],
            Self::Zxz => [Z, X, Z],
            Self::Zyz => [Z, Y, Z],
            Self::Xyz => [X, Y, Z],
            Self::Xzy => [X, Z, Y],
            Self::Yxz => [Y, X, Z],
            Self::Yzx => [Y, Z, X],
            Self::Zxy => [Z, X, Y],
            Self::Zyx => [Z, Y, X],
        }
    }

    /// Proper Euler orders repeat their first axis in the last position.
    pub const fn is_proper_euler(self) -> bool {
        let [first, _, last] = self.axes();
        first.index() == last.index()
    }
}

impl Display for RotationOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl Serialize for RotationOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for RotationOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut axes = Vec::with_capacity(3);
        for c in s.chars() {
            axes.push(Axis::from_char(c)?);
        }

        Self::ALL
            .iter()
            .copied()
            .find(|order| order.axes().as_slice() == axes.as_slice())
            .ok_or_else(|| ConfigError::UnknownOrder(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Handedness {
    #[default]
    Right,
    Left,
}

impl Handedness {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
        }
    }

    pub const fn initial_basis(self) -> Basis {
        match self {
            Self::Right => Basis::RIGHT_HANDED,
            Self::Left => Basis::LEFT_HANDED,
        }
    }
}

impl Display for Handedness {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for Handedness {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "right" => Ok(Self::Right),
            "left" => Ok(Self::Left),
            other => Err(ConfigError::UnknownHandedness(other.to_string())),
        }
    }
}

/// Three rotation angles in degrees. Any finite value is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct AngleTriple {
    degrees: [f64; 3],
}

impl AngleTriple {
    pub const ZERO: Self = Self::new([0.0; 3]);

    pub const fn new(degrees: [f64; 3]) -> Self {
        Self { degrees }
    }

    pub const fn degrees(&self) -> [f64; 3] {
        self.degrees
    }

    pub fn radians(&self) -> [f64; 3] {
        self.degrees.map(f64::to_radians)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymbolTriple {
    labels: [String; 3],
}

impl SymbolTriple {
    pub fn new(labels: [impl Into<String>; 3]) -> Self {
        Self {
            labels: labels.map(Into::into),
        }
    }

    pub fn labels(&self) -> &[String; 3] {
        &self.labels
    }

    pub fn get(&self, index: usize) -> &str {
        &self.labels[index]
    }
}

impl Default for SymbolTriple {
    fn default() -> Self {
        Self::new([
            SymbolPreset::Alpha.latex(),
            SymbolPreset::Beta.latex(),
            SymbolPreset::Gamma.latex(),
        ])
    }
}

/// The canonical symbol menu offered to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolPreset {
    Alpha,
    Beta,
    Gamma,
    Psi,
    Theta,
    Phi,
    Roll,
    Pitch,
    Yaw,
    ThetaX,
    ThetaY,
    ThetaZ,
    Theta1,
    Theta2,
    Theta3,
}

impl SymbolPreset {
    pub const ALL: [Self; 15] = [
        Self::Alpha,
        Self::Beta,
        Self::Gamma,
        Self::Psi,
        Self::Theta,
        Self::Phi,
        Self::Roll,
        Self::Pitch,
        Self::Yaw,
        Self::ThetaX,
        Self::ThetaY,
        Self::ThetaZ,
        Self::Theta1,
        Self::Theta2,
        Self::Theta3,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Gamma => "gamma",
            Self::Psi => "psi",
            Self::Theta => "theta",
            Self::Phi => "phi",
            Self::Roll => "roll",
            Self::Pitch => "pitch",
            Self::Yaw => "yaw",
            Self::ThetaX => "theta_x",
            Self::ThetaY => "theta_y",
            Self::ThetaZ => "theta_z",
            Self::Theta1 => "theta_1",
            Self::Theta2 => "theta_2",
            Self::Theta3 => "theta_3",
        }
    }

    pub const fn latex(self) -> &'static str {
        match self {
            Self::Alpha => "\\alpha",
            Self::Beta => "\\beta",
            Self::Gamma => "\\gamma",
            Self::Psi => "\\psi",
            Self::Theta => "\\theta",
            Self::Phi => "\\phi",
            Self::Roll => "\\textit{roll}",
            Self::Pitch => "\\textit{pitch}",
            Self::Yaw => "\\textit{yaw}",
            Self::ThetaX => "\\theta_x",
            Self::ThetaY => "\\theta_y",
            Self::ThetaZ => "\\theta_z",
            Self::Theta1 => "\\theta_1",
            Self::Theta2 => "\\theta_2",
            Self::Theta3 => "\\theta_3",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|preset| preset.name().eq_ignore_ascii_case(normalized))
    }
}

/// Resolves a preset name (`alpha`, `theta_x`, ...) to its LaTeX form;
/// anything else is returned unchanged.
pub fn resolve_symbol(input: &str) -> String {
    SymbolPreset::from_name(input)
        .map(|preset| preset.latex().to_string())
        .unwrap_or_else(|| input.to_string())
}
