use wgpu::util::DeviceExt;

use crate::data_structures::{
    instance::Instance,
    model::Model,
};

/**
 * An `InstanceBatch` is one model rendered many times through instancing.
 *
 * The mesh and material of `model` exist on the GPU once; only the small
 * per-instance transforms are duplicated, packed into `instance_buffer`.
 * Mutate `instances` freely, then call `write_to_buffer` to push the new
 * transforms to the GPU before the next draw.
 */
pub struct InstanceBatch {
    pub model: Model,
    pub instances: Vec<Instance>,
    pub instance_buffer: wgpu::Buffer,
}

impl InstanceBatch {
    /// Create `amount` identity instances of `model`.
    pub fn new(device: &wgpu::Device, model: Model, amount: usize) -> Self {
        let instances = (0..amount).map(|_| Instance::new()).collect::<Vec<_>>();

        let instance_data = instances.iter().map(Instance::to_raw).collect::<Vec<_>>();
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Instance Buffer", model.mesh.name)),
            contents: bytemuck::cast_slice(&instance_data),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            model,
            instances,
            instance_buffer,
        }
    }

    /// Push the current CPU-side transforms into the GPU instance buffer.
    pub fn write_to_buffer(&self, queue: &wgpu::Queue) {
        let instance_data = self
            .instances
            .iter()
            .map(Instance::to_raw)
            .collect::<Vec<_>>();
        queue.write_buffer(
            &self.instance_buffer,
            0,
            bytemuck::cast_slice(&instance_data),
        );
    }
}
