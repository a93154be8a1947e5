use log::debug;

use crate::error::{SceneError, StorageError};
use crate::primitive::PrimitiveKind;
use crate::storage::{check_capacity, Color, Position, VertexStorage, DEFAULT_CAPACITY};

/// One drawable object: a primitive kind and the vertices clicked into it.
#[derive(Debug)]
pub struct Shape {
    kind: PrimitiveKind,
    storage: VertexStorage,
}

impl Shape {
    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    pub fn storage(&self) -> &VertexStorage {
        &self.storage
    }

    pub fn vertex_count(&self) -> usize {
        self.storage.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneState {
    Empty,
    Active,
}

/// All shapes drawn so far, in creation order, plus the drawing state that
/// decides where the next vertex goes.
#[derive(Debug)]
pub struct Scene {
    capacity: usize,
    shapes: Vec<Shape>,
    active: Option<usize>,
    color: Color,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            shapes: Vec::new(),
            active: None,
            color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scene whose shapes each hold up to `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Result<Self, StorageError> {
        let capacity = check_capacity(capacity)?;
        Ok(Self {
            capacity,
            ..Self::default()
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn state(&self) -> SceneState {
        match self.active {
            Some(_) => SceneState::Active,
            None => SceneState::Empty,
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_shape(&self) -> Option<&Shape> {
        self.active.and_then(|i| self.shapes.get(i))
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Starts a new shape and makes it the target of subsequent appends.
    pub fn create_shape(&mut self, kind: PrimitiveKind) -> Result<&Shape, SceneError> {
        let storage = VertexStorage::new(self.capacity)?;
        let index = self.shapes.len();
        self.shapes.push(Shape { kind, storage });
        self.active = Some(index);
        debug!("created shape #{} ({})", index, kind);
        Ok(&self.shapes[index])
    }

    /// Same as [`Scene::create_shape`], starting from a mode name.
    pub fn create_shape_from_mode(&mut self, name: &str) -> Result<&Shape, SceneError> {
        let kind = PrimitiveKind::from_mode_name(name)?;
        self.create_shape(kind)
    }

    /// Out-of-range components are passed through untouched.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_rgb(&mut self, rgb: [f32; 3]) {
        self.set_color(with_alpha(rgb));
    }

    /// Appends `position` with the current color to the active shape and
    /// returns the index the vertex was written at.
    pub fn append_to_active(&mut self, position: Position) -> Result<usize, SceneError> {
        let index = self.active.ok_or(SceneError::NoActiveShape)?;
        let color = self.color;
        let shape = self
            .shapes
            .get_mut(index)
            .ok_or(SceneError::NoActiveShape)?;
        shape.storage.append(position, color)?;
        debug!(
            "shape #{} vertex {} at ({}, {})",
            index,
            shape.storage.len() - 1,
            position[0],
            position[1]
        );
        Ok(shape.storage.len() - 1)
    }

    /// Reports every shape, oldest first, with its current vertex count.
    pub fn render_all<F>(&self, mut draw: F)
    where
        F: FnMut(PrimitiveKind, usize),
    {
        for shape in &self.shapes {
            draw(shape.kind, shape.storage.len());
        }
    }
}

/// Completes an RGB triple with an opaque alpha.
pub fn with_alpha(rgb: [f32; 3]) -> Color {
    [rgb[0], rgb[1], rgb[2], 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw_calls(scene: &Scene) -> Vec<(PrimitiveKind, usize)> {
        let mut calls = Vec::new();
        scene.render_all(|kind, count| calls.push((kind, count)));
        calls
    }

    #[test]
    fn empty_scene_rejects_appends() {
        let mut scene = Scene::new();
        assert_eq!(scene.state(), SceneState::Empty);
        assert_eq!(
            scene.append_to_active([0.0, 0.0]),
            Err(SceneError::NoActiveShape)
        );
        assert!(draw_calls(&scene).is_empty());
    }

    #[test]
    fn zero_capacity_scene_is_rejected() {
        assert_eq!(
            Scene::with_capacity(0).unwrap_err(),
            StorageError::InvalidCapacity(0)
        );
    }

    #[test]
    fn oversized_scene_capacity_is_rejected() {
        assert_eq!(
            Scene::with_capacity(usize::MAX / 2).unwrap_err(),
            StorageError::InvalidCapacity(usize::MAX / 2)
        );
    }

    #[test]
    fn created_shapes_use_scene_capacity() {
        let mut scene = Scene::with_capacity(3).unwrap();
        let shape = scene.create_shape(PrimitiveKind::Points).unwrap();
        assert_eq!(shape.storage().capacity(), 3);
        assert_eq!(Scene::new().capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn render_order_follows_creation_order() {
        let mut scene = Scene::new();
        scene.create_shape(PrimitiveKind::Points).unwrap();
        scene.create_shape(PrimitiveKind::Lines).unwrap();
        scene.create_shape(PrimitiveKind::Triangles).unwrap();

        assert_eq!(
            draw_calls(&scene),
            vec![
                (PrimitiveKind::Points, 0),
                (PrimitiveKind::Lines, 0),
                (PrimitiveKind::Triangles, 0),
            ]
        );
    }

    #[test]
    fn newest_shape_receives_appends() {
        let mut scene = Scene::new();
        scene.create_shape(PrimitiveKind::Lines).unwrap();
        scene.create_shape(PrimitiveKind::Points).unwrap();
        assert_eq!(scene.state(), SceneState::Active);
        assert_eq!(scene.active_shape().unwrap().kind(), PrimitiveKind::Points);

        assert_eq!(scene.append_to_active([0.1, 0.2]), Ok(0));

        assert_eq!(scene.shapes()[0].vertex_count(), 0);
        assert_eq!(scene.shapes()[1].vertex_count(), 1);
    }

    #[test]
    fn color_applies_to_later_appends_only() {
        let mut scene = Scene::new();
        scene.create_shape(PrimitiveKind::LineStrip).unwrap();
        scene.set_rgb([0.0, 1.0, 0.0]);
        scene.append_to_active([0.0, 0.0]).unwrap();
        scene.set_color([2.0, -1.0, 0.5, 1.0]);
        scene.append_to_active([1.0, 1.0]).unwrap();

        let colors: Vec<Color> = scene.shapes()[0]
            .storage()
            .readable_range()
            .iter()
            .map(|(_, color)| color)
            .collect();
        assert_eq!(colors, vec![[0.0, 1.0, 0.0, 1.0], [2.0, -1.0, 0.5, 1.0]]);
    }

    #[test]
    fn overflow_propagates_and_keeps_vertices() {
        let mut scene = Scene::with_capacity(1).unwrap();
        scene.create_shape(PrimitiveKind::Points).unwrap();
        scene.append_to_active([0.3, 0.3]).unwrap();

        assert_eq!(
            scene.append_to_active([0.4, 0.4]),
            Err(SceneError::Storage(StorageError::CapacityExceeded {
                capacity: 1
            }))
        );
        let range = scene.shapes()[0].storage().readable_range();
        assert_eq!(range.len(), 1);
        assert_eq!(range.get(0).unwrap().0, [0.3, 0.3]);
    }

    #[test]
    fn render_is_repeatable() {
        let mut scene = Scene::new();
        scene.create_shape_from_mode("TRIANGLE_STRIP").unwrap();
        scene.append_to_active([0.0, 0.0]).unwrap();
        scene.append_to_active([0.5, 0.0]).unwrap();

        assert_eq!(draw_calls(&scene), draw_calls(&scene));
    }

    #[test]
    fn invalid_mode_creates_nothing() {
        let mut scene = Scene::new();
        assert!(scene.create_shape_from_mode("CIRCLES").is_err());
        assert_eq!(scene.state(), SceneState::Empty);
        assert!(scene.shapes().is_empty());
    }
}
