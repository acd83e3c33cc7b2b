//! Rotation composition engine for Euler-angle sequences.
//!
//! Builds elementary rotations, applies them intrinsically to a frame,
//! and produces the symbolic and numeric composed-matrix text shown
//! alongside the 3D views.

pub mod common;
pub mod domain;
pub mod modules;
pub mod numerics;
