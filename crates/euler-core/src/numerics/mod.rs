pub mod rotation;

pub use rotation::{build_elementary_rotation, change_basis, rotate_basis};
