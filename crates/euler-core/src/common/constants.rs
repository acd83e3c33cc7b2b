/// Fractional digits used for every numeric matrix entry.
pub const MATRIX_DIGITS: usize = 7;

/// Nominal bound of the angle inputs; values outside are still accepted.
pub const NOMINAL_ANGLE_LIMIT_DEGREES: f64 = 360.0;

/// Axis labels of the initial frame, the two intermediate frames and the final frame.
pub const FRAME_LABELS: [[&str; 3]; 4] = [
    ["x", "y", "z"],
    ["x'", "y'", "z'"],
    ["x''", "y''", "z''"],
    ["X", "Y", "Z"],
];

pub const AXIS_COLORS: [&str; 3] = ["red", "green", "blue"];

pub const BEFORE_LABEL_MARGIN: f64 = 0.1;
pub const AFTER_LABEL_MARGIN: f64 = 0.25;

pub const CAMERA_POSITION: [f64; 3] = [2.5, 2.5, 2.5];
pub const CAMERA_NEAR: f64 = 0.01;
pub const CAMERA_FAR: f64 = 100.0;

pub const GRID_SIZE: i32 = 10;
pub const GRID_COLOR: &str = "gray";
