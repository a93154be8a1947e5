use log::warn;
use web_sys::WebGl2RenderingContext as GL;

use crate::config::DrawingConfig;
use crate::error::{Error, SceneError};
use crate::renderer::Renderer;
use crate::scene::Scene;
use crate::storage::{Color, Position};

/// The scene together with the renderer that displays it. Event handlers
/// share one instance and redraw after every change.
pub struct DrawingApp {
    scene: Scene,
    renderer: Renderer,
}

impl DrawingApp {
    pub fn new(gl: GL, config: &DrawingConfig) -> Result<Self, Error> {
        config.validate()?;
        let mut scene = Scene::with_capacity(config.capacity)?;
        scene.set_color(config.initial_color);
        let renderer = Renderer::new(gl, config)?;
        Ok(Self { scene, renderer })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn set_viewport(&self, width: u32, height: u32) {
        self.renderer.set_viewport(width as i32, height as i32);
    }

    /// Starts a new shape for the named mode.
    pub fn set_mode(&mut self, name: &str) -> Result<(), SceneError> {
        self.scene.create_shape_from_mode(name)?;
        Ok(())
    }

    pub fn set_color(&mut self, color: Color) {
        self.scene.set_color(color);
    }

    pub fn click(&mut self, position: Position) -> Result<usize, SceneError> {
        self.scene.append_to_active(position)
    }

    pub fn render(&mut self) {
        if let Err(err) = self.renderer.draw(&self.scene) {
            warn!("render failed: {}", err);
        }
    }
}
