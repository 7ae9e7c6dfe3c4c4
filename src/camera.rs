//! Orbit camera, perspective projection, and the camera GPU uniform.
//!
//! The camera orbits a fixed target: mouse drag changes yaw/pitch, the
//! scroll wheel changes the distance. `CameraResources` bundles the camera
//! together with its uniform buffer and bind group so the context can own
//! one set of GPU resources shared by every pipeline.

use cgmath::{EuclideanSpace, InnerSpace, Matrix4, Point3, Rad, SquareMatrix, Vector3, perspective};
use instant::Duration;
use winit::event::{MouseScrollDelta, WindowEvent};

/// wgpu clip space spans z in [0, 1] while cgmath produces OpenGL's [-1, 1].
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// A camera described by the point it orbits, not the point it sits at.
///
/// `yaw` of zero places the camera on the positive z axis of the target,
/// `pitch` tilts it up (positive) or down (negative), `distance` is the
/// orbit radius. The world position is derived, never stored.
#[derive(Clone, Debug)]
pub struct Camera {
    pub target: Point3<f32>,
    pub yaw: Rad<f32>,
    pub pitch: Rad<f32>,
    pub distance: f32,
}

impl Camera {
    /// Build an orbit camera that initially sits at `eye` looking at `target`.
    pub fn new<P: Into<Point3<f32>>>(eye: P, target: P) -> Self {
        let eye = eye.into();
        let target = target.into();
        let offset = eye - target;
        let distance = offset.magnitude();
        let pitch = Rad((offset.y / distance).asin());
        let yaw = Rad(offset.x.atan2(offset.z));
        Self {
            target,
            yaw,
            pitch,
            distance,
        }
    }

    /// World-space position derived from the orbit parameters.
    pub fn position(&self) -> Point3<f32> {
        let (sin_yaw, cos_yaw) = self.yaw.0.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.0.sin_cos();
        self.target
            + Vector3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.distance
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.position(), self.target, Vector3::unit_y())
    }
}

/// Perspective projection parameters, kept separate from the camera so a
/// resize only touches the aspect ratio.
#[derive(Clone, Debug)]
pub struct Projection {
    aspect: f32,
    fovy: Rad<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

/// The camera data as it is laid out in the uniform buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    // The fourth component only exists for 16 byte uniform alignment.
    view_position: [f32; 4],
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: Matrix4::identity().into(),
        }
    }

    pub fn update_view_proj(&mut self, camera: &Camera, projection: &Projection) {
        self.view_position = camera.position().to_homogeneous().into();
        self.view_proj = (projection.matrix() * camera.view_matrix()).into();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulates mouse input between frames and applies it to the camera once
/// per frame in `update`.
#[derive(Debug)]
pub struct CameraController {
    sensitivity: f32,
    zoom_speed: f32,
    rotate_delta: (f32, f32),
    scroll_delta: f32,
    min_distance: f32,
    max_distance: f32,
}

impl CameraController {
    pub fn new(sensitivity: f32, zoom_speed: f32) -> Self {
        Self {
            sensitivity,
            zoom_speed,
            rotate_delta: (0.0, 0.0),
            scroll_delta: 0.0,
            min_distance: 1.0,
            max_distance: 150.0,
        }
    }

    /// Feed raw mouse motion (pixels) while the orbit button is held.
    pub fn handle_mouse(&mut self, dx: f64, dy: f64) {
        self.rotate_delta.0 += dx as f32;
        self.rotate_delta.1 += dy as f32;
    }

    /// Window events the controller cares about: only the scroll wheel.
    pub fn handle_window_events(&mut self, event: &WindowEvent) {
        if let WindowEvent::MouseWheel { delta, .. } = event {
            self.handle_scroll(delta);
        }
    }

    pub fn handle_scroll(&mut self, delta: &MouseScrollDelta) {
        self.scroll_delta += match delta {
            MouseScrollDelta::LineDelta(_, rows) => *rows,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 20.0,
        };
    }

    /// Apply the input accumulated since the last frame.
    pub fn update(&mut self, camera: &mut Camera, _dt: Duration) {
        camera.yaw -= Rad(self.rotate_delta.0 * self.sensitivity);
        camera.pitch += Rad(self.rotate_delta.1 * self.sensitivity);
        // Keep the camera off the poles so look_at keeps a well-defined up.
        let limit = Rad(std::f32::consts::FRAC_PI_2 - 0.01);
        camera.pitch = Rad(camera.pitch.0.clamp(-limit.0, limit.0));

        camera.distance = (camera.distance - self.scroll_delta * self.zoom_speed)
            .clamp(self.min_distance, self.max_distance);

        self.rotate_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
    }
}

/// Camera state plus the GPU resources derived from it.
#[derive(Debug)]
pub struct CameraResources {
    pub camera: Camera,
    pub controller: CameraController,
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Deg;

    #[test]
    fn camera_from_eye_restores_position() {
        let camera = Camera::new([0.0, 2.0, 70.0], [0.0, 0.0, 0.0]);
        let position = camera.position();
        assert!((position.x - 0.0).abs() < 1e-4);
        assert!((position.y - 2.0).abs() < 1e-4);
        assert!((position.z - 70.0).abs() < 1e-4);
    }

    #[test]
    fn view_projection_is_finite() {
        let camera = Camera::new([0.0, 2.0, 70.0], [0.0, 0.0, 0.0]);
        let projection = Projection::new(1280, 720, Deg(30.0), 0.01, 200.0);
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera, &projection);
        let flat: &[f32; 16] = bytemuck::cast_ref(&uniform.view_proj);
        assert!(flat.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn controller_clamps_pitch_and_distance() {
        let mut camera = Camera::new([0.0, 2.0, 70.0], [0.0, 0.0, 0.0]);
        let mut controller = CameraController::new(0.005, 2.0);
        // A huge upward drag must not flip the camera over the pole.
        controller.handle_mouse(0.0, 1e6);
        controller.update(&mut camera, Duration::from_millis(16));
        assert!(camera.pitch.0 < std::f32::consts::FRAC_PI_2);

        // Zooming in forever stops at the near clamp.
        let mut zoom = CameraController::new(0.005, 2.0);
        for _ in 0..1000 {
            zoom.handle_scroll(&MouseScrollDelta::LineDelta(0.0, 1.0));
            zoom.update(&mut camera, Duration::from_millis(16));
        }
        assert!(camera.distance >= 1.0);
    }

    #[test]
    fn orbit_keeps_distance_to_target() {
        let mut camera = Camera::new([0.0, 2.0, 70.0], [0.0, 0.0, 0.0]);
        let distance = camera.distance;
        let mut controller = CameraController::new(0.005, 2.0);
        controller.handle_mouse(250.0, -80.0);
        controller.update(&mut camera, Duration::from_millis(16));
        let offset = camera.position() - camera.target;
        assert!((offset.magnitude() - distance).abs() < 1e-3);
    }
}
