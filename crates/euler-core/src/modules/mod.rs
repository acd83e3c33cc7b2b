pub mod formula;
pub mod scene;
pub mod sequence;
pub mod serialization;
pub mod session;

pub use formula::{
    FormattedMatrix, StepInfo, elementary_symbolic_matrix, evaluate_composed_matrix,
    format_composed_matrix, render_derivation, step_info,
};
pub use scene::{SceneSet, build_scenes};
pub use sequence::{RotationSequence, RotationStep, compose_sequence};
pub use session::{InputChange, RenderState, VisualizerSession};
