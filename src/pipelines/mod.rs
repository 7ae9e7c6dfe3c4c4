//! Render pipeline definitions.
//!
//! One opaque instanced-color pipeline is all this crate needs; it is built
//! once by the context and shared by every batch in the scene.

pub mod basic;
pub mod light;

/// Pipelines owned by the context and reused across all flows.
#[derive(Debug)]
pub struct Pipelines {
    pub basic: wgpu::RenderPipeline,
}
