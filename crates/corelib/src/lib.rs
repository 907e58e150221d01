//! Core shared types: math re-exports and small vector helpers.

pub use glam::{Vec2, Vec3};

pub mod math;
