//! Render composition and pipeline batching.
//!
//! Flows describe what they want drawn with the [`Render`] enum; the engine
//! flattens all flows' renders into one batch and draws it with the shared
//! pipeline. This keeps one render pass and one pipeline bind per frame no
//! matter how many flows contribute objects.
//!
//! # Key types
//!
//! - [`Render<'a>`] is the primary enum describing render operations
//! - [`Instanced<'a>`] contains data for instanced rendering (model + instance buffer)

use crate::data_structures::{batch::InstanceBatch, model::Model};

/// Data for instanced object rendering: a model and its instance buffer.
///
/// The instance buffer contains per-instance transformation data; the model's
/// vertex, index and material buffers are shared across every instance.
pub struct Instanced<'a> {
    pub instance: &'a wgpu::Buffer,
    pub model: &'a Model,
    pub amount: usize,
}

/// Specifies how a scene object should be rendered.
///
/// # Variants
///
/// - `None` renders nothing
/// - `Default(Instanced)` renders a single opaque instanced object
/// - `Defaults(Vec<Instanced>)` renders a batch of opaque instanced objects
/// - `Composed(Vec<Render>)` recursively renders a composition of renders
pub enum Render<'a> {
    None,
    Default(Instanced<'a>),
    Defaults(Vec<Instanced<'a>>),
    Composed(Vec<Render<'a>>),
}

impl<'a> Render<'a> {
    /// Flatten this render tree into the frame's draw list.
    pub(crate) fn collect(self, basics: &mut Vec<Instanced<'a>>) {
        match self {
            Render::Default(instanced) => basics.push(instanced),
            Render::Defaults(mut vec) => basics.append(&mut vec),
            Render::Composed(renders) => renders
                .into_iter()
                .for_each(|render| render.collect(basics)),
            Render::None => (),
        }
    }
}

impl<'a> From<&'a InstanceBatch> for Render<'a> {
    fn from(batch: &'a InstanceBatch) -> Self {
        Render::Default(Instanced {
            instance: &batch.instance_buffer,
            model: &batch.model,
            amount: batch.instances.len(),
        })
    }
}
