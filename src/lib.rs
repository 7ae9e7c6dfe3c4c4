//! stardust-ngin
//!
//! A lightweight, cross-platform instancing demo engine for native and WASM
//! targets. The crate exists to demonstrate one thing well: many mesh
//! instances sharing a single geometry and a single material, rendered
//! through one instanced draw call. Everything else (window, camera, lights,
//! event loop) is the minimal surface needed to put that on screen.
//!
//! High-level modules
//! - `camera`: perspective projection, orbit camera and its controller
//! - `context`: central GPU and window context that owns device/queue/pipeline
//! - `data_structures`: engine data models (meshes, materials, instances)
//! - `flow`: high level flow control (scenes / update loops)
//! - `pipelines`: the instanced color pipeline and light uniforms
//! - `resources`: procedural geometry and model/material creation
//! - `render`: render composition for pipeline reuse across flows
//!

pub mod camera;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod pipelines;
pub mod render;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use wgpu::*;
pub use winit::dpi::PhysicalPosition;
pub use winit::event::DeviceEvent;
pub use winit::event::WindowEvent;
pub use winit::keyboard::{Key, NamedKey};
