use crate::common::constants::{
    AFTER_LABEL_MARGIN, AXIS_COLORS, BEFORE_LABEL_MARGIN, CAMERA_FAR, CAMERA_NEAR, CAMERA_POSITION,
    FRAME_LABELS, GRID_COLOR, GRID_SIZE,
};
use crate::domain::{Basis, Vector3};
use crate::modules::sequence::RotationSequence;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisArrow {
    pub head: Vector3,
    pub label: &'static str,
    pub color: &'static str,
    pub label_position: Vector3,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameView {
    pub origin: Vector3,
    pub axes: [AxisArrow; 3],
    pub label_margin: f64,
}

impl FrameView {
    pub fn new(basis: &Basis, labels: [&'static str; 3], label_margin: f64) -> Self {
        let origin = Vector3::zeros();
        let arrow = |index: usize, head: Vector3| AxisArrow {
            head,
            label: labels[index],
            color: AXIS_COLORS[index],
            label_position: label_anchor(origin, head, label_margin),
        };
        Self {
            origin,
            axes: [arrow(0, basis.e1), arrow(1, basis.e2), arrow(2, basis.e3)],
            label_margin,
        }
    }
}

/// Point just past the arrow tip, `margin` further along the arrow direction.
pub fn label_anchor(origin: Vector3, head: Vector3, margin: f64) -> Vector3 {
    let direction = head - origin;
    direction
        .try_normalize(0.0)
        .map_or(direction, |unit| unit * (direction.norm() + margin))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "step")]
pub enum SceneKind {
    Step(usize),
    Overall,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub kind: SceneKind,
    pub before: FrameView,
    pub after: FrameView,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    pub position: [f64; 3],
    pub near: f64,
    pub far: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: CAMERA_POSITION,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridLine {
    pub from: Vector3,
    pub to: Vector3,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSet {
    pub camera: Camera,
    pub grid_color: &'static str,
    pub grid: Vec<GridLine>,
    pub scenes: [Scene; 4],
}

/// Square ground grid in the XZ plane, `size` cells wide, centred on the origin.
pub fn ground_grid(size: i32) -> Vec<GridLine> {
    let from = -(size / 2);
    let to = from + size;
    let (lo, hi) = (f64::from(from), f64::from(to));
    (from..=to)
        .flat_map(|i| {
            let i = f64::from(i);
            [
                GridLine {
                    from: Vector3::new(i, 0.0, lo),
                    to: Vector3::new(i, 0.0, hi),
                },
                GridLine {
                    from: Vector3::new(lo, 0.0, i),
                    to: Vector3::new(hi, 0.0, i),
                },
            ]
        })
        .collect()
}

pub fn build_scenes(sequence: &RotationSequence) -> SceneSet {
    let step_scene = |index: usize| {
        let step = &sequence.steps[index];
        Scene {
            kind: SceneKind::Step(index + 1),
            before: FrameView::new(&step.before, step.before_labels, BEFORE_LABEL_MARGIN),
            after: FrameView::new(&step.after, step.after_labels, AFTER_LABEL_MARGIN),
        }
    };
    let overall = Scene {
        kind: SceneKind::Overall,
        before: FrameView::new(
            &sequence.initial_basis,
            FRAME_LABELS[0],
            BEFORE_LABEL_MARGIN,
        ),
        after: FrameView::new(&sequence.final_basis, FRAME_LABELS[3], AFTER_LABEL_MARGIN),
    };

    SceneSet {
        camera: Camera::default(),
        grid_color: GRID_COLOR,
        grid: ground_grid(GRID_SIZE),
        scenes: [step_scene(0), step_scene(1), step_scene(2), overall],
    }
}
