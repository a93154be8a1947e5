use log::LevelFilter;

use crate::error::StorageError;
use crate::storage::{check_capacity, Color, DEFAULT_CAPACITY};

/// Startup settings for the drawing page.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingConfig {
    /// Vertices each shape can hold, on the CPU and in its GPU buffers.
    pub capacity: usize,
    pub point_size: f32,
    pub clear_color: Color,
    /// Used when the color input is missing or unreadable.
    pub initial_color: Color,
    pub canvas_id: String,
    pub mode_select_id: String,
    pub color_input_id: String,
    pub log_level: LevelFilter,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            point_size: 5.0,
            clear_color: [1.0, 1.0, 1.0, 0.0],
            initial_color: [0.0, 0.0, 0.0, 1.0],
            canvas_id: "webgl-canvas".into(),
            mode_select_id: "draw-mode".into(),
            color_input_id: "draw-color".into(),
            log_level: LevelFilter::Info,
        }
    }
}

impl DrawingConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn validate(&self) -> Result<(), StorageError> {
        check_capacity(self.capacity)?;
        Ok(())
    }
}
