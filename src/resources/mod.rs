use wgpu::util::DeviceExt;

use crate::{
    data_structures::model::{Material, Mesh, Model},
    resources::geometry::GeometryData,
};

/**
 * This module turns procedural geometry and plain colors into GPU models.
 * There is no file loading here: every mesh in this crate is built in code.
 */
pub mod geometry;

/// Bind group layout for a flat-color material (one uniform buffer).
pub fn material_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("material_bind_group_layout"),
    })
}

/// Convert an `0xRRGGBB` color into the linear RGBA the shader works in.
///
/// The surface format is sRGB, so the fragment shader must output linear
/// values and let the hardware re-encode them.
pub fn color_from_hex(hex: u32) -> [f32; 4] {
    let channel = |c: u32| (((c & 0xff) as f32) / 255.0).powf(2.2);
    [channel(hex >> 16), channel(hex >> 8), channel(hex), 1.0]
}

/// Create a flat-color material: uniform buffer plus bind group.
pub fn create_material(device: &wgpu::Device, name: &str, color: [f32; 4]) -> Material {
    let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{} Material Buffer", name)),
        contents: bytemuck::cast_slice(&color),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout: &material_layout(device),
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
        label: Some(&format!("{} Material Bind Group", name)),
    });
    Material {
        name: name.to_string(),
        color,
        buffer,
        bind_group,
    }
}

/// Upload geometry and pair it with a material.
///
/// The returned model holds the only copy of the vertex and index data on the
/// GPU; render it a thousand times and these buffers still exist once.
pub fn create_model(
    device: &wgpu::Device,
    name: &str,
    geometry: &GeometryData,
    material: Material,
) -> Model {
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{} Vertex Buffer", name)),
        contents: bytemuck::cast_slice(&geometry.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{} Index Buffer", name)),
        contents: bytemuck::cast_slice(&geometry.indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    Model {
        mesh: Mesh {
            name: name.to_string(),
            vertex_buffer,
            index_buffer,
            num_elements: geometry.indices.len() as u32,
        },
        material,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_decode_to_linear_range() {
        let yellow = color_from_hex(0xffec50);
        assert_eq!(yellow[0], 1.0);
        assert!(yellow[1] > yellow[2]);
        assert_eq!(yellow[3], 1.0);

        let black = color_from_hex(0x000000);
        assert_eq!(&black[0..3], &[0.0, 0.0, 0.0]);
    }
}
