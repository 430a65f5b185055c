//! Shader uniform bridge for the two CRT materials.
//!
//! [`CrtUniforms`] mirrors the WGSL uniform block byte for byte. Each
//! config-driven control owns a [`CrtControl`] slot so a change writes only
//! the bytes of that control; the time slot is written every frame.

mod material;
mod uniforms;

pub use material::CrtMaterial;
pub use uniforms::{changed_controls, CrtControl, CrtUniforms, SurfaceKind};

/// Overlay opacity of the content surface. The border gets none.
pub const CONTENT_OVERLAY_OPACITY: f32 = 0.15;
