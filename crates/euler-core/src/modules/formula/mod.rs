mod derivation;
pub mod numeric;
pub mod symbolic;

pub use derivation::{StepInfo, render_derivation, step_info};
pub use numeric::{FormattedMatrix, evaluate_composed_matrix};
pub use symbolic::{elementary_symbolic_matrix, evaluate_symbolic_form, format_composed_matrix};
