//! Per-frame camera pose and light animation.
//!
//! The state lives with the caller and is applied to a [`RayTracer`]
//! between frames; controls report changes through [`FrameControls`].

use std::f64::consts::FRAC_PI_2;

use glint_math::{Point3D, Vector3D};

use crate::{Camera, PixelBuffer, RayTracer, TileResult};

pub const MIN_CAMERA_DISTANCE: f64 = 1.0;
pub const MAX_CAMERA_DISTANCE: f64 = 10.0;
pub const DEFAULT_CAMERA_DISTANCE: f64 = 3.0;

/// Circular path the first light follows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightOrbit {
    pub radius: f64,
    pub height: f64,
    /// Angle added per frame, in radians
    pub step: f64,
}

impl Default for LightOrbit {
    fn default() -> Self {
        Self {
            radius: 1.5,
            height: 1.5,
            step: 0.05,
        }
    }
}

/// Observer interface for whatever drives the animation (a UI, a script).
pub trait FrameControls {
    fn on_camera_distance_changed(&mut self, distance: f64);
    fn on_rotation_changed(&mut self, rotation: f64);
    fn on_pause_toggled(&mut self, paused: bool);
}

/// Camera pose and light position for the next frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameState {
    /// Distance from the eye to `look_at`, within
    /// `[MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE]`
    pub camera_distance: f64,
    /// Camera angle about the y axis; 0 looks down -Z
    pub rotation: f64,
    pub paused: bool,
    pub light_angle: f64,
    pub light_orbit: LightOrbit,
    pub look_at: Point3D,
}

impl Default for FrameState {
    fn default() -> Self {
        Self {
            camera_distance: DEFAULT_CAMERA_DISTANCE,
            rotation: 0.0,
            paused: false,
            light_angle: FRAC_PI_2,
            light_orbit: LightOrbit::default(),
            look_at: Point3D::ORIGIN,
        }
    }
}

impl FrameState {
    /// Camera orbiting `look_at` at the current distance and rotation.
    pub fn camera(&self) -> Camera {
        let offset = Vector3D::X * (self.camera_distance * self.rotation.sin())
            + Vector3D::Z * (self.camera_distance * self.rotation.cos());
        Camera::new(self.look_at + offset, self.look_at)
    }

    /// `(r cos a, h, r sin a)` on the light orbit.
    pub fn light_position(&self) -> Point3D {
        let orbit = &self.light_orbit;
        Point3D::ORIGIN
            + Vector3D::X * (orbit.radius * self.light_angle.cos())
            + Vector3D::Y * orbit.height
            + Vector3D::Z * (orbit.radius * self.light_angle.sin())
    }

    /// Moves the light one step along its orbit unless paused. Returns
    /// whether anything changed, i.e. whether a new frame is worth rendering.
    pub fn advance(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.light_angle += self.light_orbit.step;
        true
    }
}

impl FrameControls for FrameState {
    fn on_camera_distance_changed(&mut self, distance: f64) {
        if distance.is_nan() {
            log::warn!("Ignoring NaN camera distance");
            return;
        }
        self.camera_distance = distance.clamp(MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE);
    }

    fn on_rotation_changed(&mut self, rotation: f64) {
        if rotation.is_finite() {
            self.rotation = rotation;
        }
    }

    fn on_pause_toggled(&mut self, paused: bool) {
        self.paused = paused;
    }
}

impl RayTracer {
    /// Applies a frame's camera pose and moves the first light.
    pub fn apply_frame(&mut self, frame: &FrameState) {
        *self.camera_mut() = frame.camera();
        if !self.scene_mut().set_light_position(0, frame.light_position()) {
            log::debug!("Scene has no light to animate");
        }
    }

    /// [`RayTracer::apply_frame`] followed by [`RayTracer::do_ray_tracing`].
    pub fn render_frame<F>(&mut self, frame: &FrameState, on_tile_complete: F) -> PixelBuffer
    where
        F: FnMut(&TileResult),
    {
        self.apply_frame(frame);
        self.do_ray_tracing(on_tile_complete)
    }
}
