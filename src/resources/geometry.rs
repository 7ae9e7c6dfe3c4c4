use cgmath::{InnerSpace, Vector3};

use crate::data_structures::model::ModelVertex;

/// CPU-side geometry: vertices plus triangle indices, ready for upload.
pub struct GeometryData {
    pub vertices: Vec<ModelVertex>,
    pub indices: Vec<u32>,
}

impl GeometryData {
    fn quad(&mut self, normal: Vector3<f32>, corners: [Vector3<f32>; 4]) {
        let base = self.vertices.len() as u32;
        for corner in corners {
            self.vertices.push(ModelVertex {
                position: corner.into(),
                normal: normal.normalize().into(),
            });
        }
        // Two CCW triangles per face, viewed from outside.
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Build an axis-aligned box centered on the origin.
///
/// 24 vertices (four per face, so every face keeps its own flat normal) and
/// 36 indices. This is the single geometry all star instances share.
pub fn box_geometry(width: f32, height: f32, depth: f32) -> GeometryData {
    let (hw, hh, hd) = (width / 2.0, height / 2.0, depth / 2.0);
    let v = |x: f32, y: f32, z: f32| Vector3::new(x, y, z);

    let mut geometry = GeometryData {
        vertices: Vec::with_capacity(24),
        indices: Vec::with_capacity(36),
    };
    // front (+z)
    geometry.quad(
        v(0.0, 0.0, 1.0),
        [v(-hw, -hh, hd), v(hw, -hh, hd), v(hw, hh, hd), v(-hw, hh, hd)],
    );
    // back (-z)
    geometry.quad(
        v(0.0, 0.0, -1.0),
        [v(hw, -hh, -hd), v(-hw, -hh, -hd), v(-hw, hh, -hd), v(hw, hh, -hd)],
    );
    // right (+x)
    geometry.quad(
        v(1.0, 0.0, 0.0),
        [v(hw, -hh, hd), v(hw, -hh, -hd), v(hw, hh, -hd), v(hw, hh, hd)],
    );
    // left (-x)
    geometry.quad(
        v(-1.0, 0.0, 0.0),
        [v(-hw, -hh, -hd), v(-hw, -hh, hd), v(-hw, hh, hd), v(-hw, hh, -hd)],
    );
    // top (+y)
    geometry.quad(
        v(0.0, 1.0, 0.0),
        [v(-hw, hh, hd), v(hw, hh, hd), v(hw, hh, -hd), v(-hw, hh, -hd)],
    );
    // bottom (-y)
    geometry.quad(
        v(0.0, -1.0, 0.0),
        [v(-hw, -hh, -hd), v(hw, -hh, -hd), v(hw, -hh, hd), v(-hw, -hh, hd)],
    );

    geometry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_has_expected_counts() {
        let geometry = box_geometry(0.2, 0.2, 0.2);
        assert_eq!(geometry.vertices.len(), 24);
        assert_eq!(geometry.indices.len(), 36);
    }

    #[test]
    fn box_indices_are_in_bounds() {
        let geometry = box_geometry(5.0, 5.0, 5.0);
        let count = geometry.vertices.len() as u32;
        assert!(geometry.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn box_normals_are_unit_length() {
        let geometry = box_geometry(1.0, 2.0, 3.0);
        for vertex in &geometry.vertices {
            let normal = Vector3::from(vertex.normal);
            assert!((normal.magnitude() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn box_extents_match_dimensions() {
        let geometry = box_geometry(1.0, 2.0, 3.0);
        for vertex in &geometry.vertices {
            assert!(vertex.position[0].abs() <= 0.5 + 1e-6);
            assert!(vertex.position[1].abs() <= 1.0 + 1e-6);
            assert!(vertex.position[2].abs() <= 1.5 + 1e-6);
        }
    }
}
