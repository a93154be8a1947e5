use crate::error::StorageError;

// vertex data types
pub type Position = [f32; 2];
pub type Color = [f32; 4];

pub const POSITION_COMPONENTS: usize = 2;
pub const COLOR_COMPONENTS: usize = 4;

/// Vertices per shape unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 100_000;

const FLOAT_SIZE: usize = std::mem::size_of::<f32>();

/// Largest capacity whose position and color buffers together still fit in
/// the `i32` byte sizes WebGL takes.
pub const MAX_CAPACITY: usize =
    i32::MAX as usize / ((POSITION_COMPONENTS + COLOR_COMPONENTS) * FLOAT_SIZE);

/// Rejects capacities of zero or above [`MAX_CAPACITY`].
pub fn check_capacity(capacity: usize) -> Result<usize, StorageError> {
    if capacity == 0 || capacity > MAX_CAPACITY {
        return Err(StorageError::InvalidCapacity(capacity));
    }
    Ok(capacity)
}

/// Bytes needed for `capacity` vertices of `components` floats each.
pub fn buffer_bytes(capacity: usize, components: usize) -> Result<usize, StorageError> {
    capacity
        .checked_mul(components)
        .and_then(|floats| floats.checked_mul(FLOAT_SIZE))
        .ok_or(StorageError::InvalidCapacity(capacity))
}

/// Fixed-capacity, append-only vertex buffers for a single shape.
///
/// Both arrays are allocated for the full capacity up front and laid out the
/// same way the GPU buffers are, so the live prefix can be uploaded as is.
#[derive(Debug, Clone)]
pub struct VertexStorage {
    capacity: usize,
    count: usize,
    positions: Box<[f32]>,
    colors: Box<[f32]>,
}

impl VertexStorage {
    pub fn new(capacity: usize) -> Result<Self, StorageError> {
        let capacity = check_capacity(capacity)?;
        let floats = |components: usize| {
            capacity
                .checked_mul(components)
                .ok_or(StorageError::InvalidCapacity(capacity))
        };
        Ok(Self {
            capacity,
            count: 0,
            positions: vec![0.0; floats(POSITION_COMPONENTS)?].into_boxed_slice(),
            colors: vec![0.0; floats(COLOR_COMPONENTS)?].into_boxed_slice(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity
    }

    /// Writes one vertex at the tail. Nothing is touched when the storage is full.
    pub fn append(&mut self, position: Position, color: Color) -> Result<(), StorageError> {
        if self.is_full() {
            return Err(StorageError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let p = self.count * POSITION_COMPONENTS;
        self.positions[p..p + POSITION_COMPONENTS].copy_from_slice(&position);
        let c = self.count * COLOR_COMPONENTS;
        self.colors[c..c + COLOR_COMPONENTS].copy_from_slice(&color);

        self.count += 1;
        Ok(())
    }

    pub fn readable_range(&self) -> VertexRange<'_> {
        self.range_from(0)
    }

    /// The written vertices starting at `start`, clamped to the live count.
    pub fn range_from(&self, start: usize) -> VertexRange<'_> {
        let start = start.min(self.count);
        VertexRange {
            start,
            positions: &self.positions
                [start * POSITION_COMPONENTS..self.count * POSITION_COMPONENTS],
            colors: &self.colors[start * COLOR_COMPONENTS..self.count * COLOR_COMPONENTS],
        }
    }
}

/// Read-only view over written vertices. Never reaches past the live count.
#[derive(Debug, Clone, Copy)]
pub struct VertexRange<'a> {
    start: usize,
    positions: &'a [f32],
    colors: &'a [f32],
}

impl<'a> VertexRange<'a> {
    /// Index of the first vertex in the owning storage.
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.positions.len() / POSITION_COMPONENTS
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Flat `x, y` components.
    pub fn positions(&self) -> &'a [f32] {
        self.positions
    }

    /// Flat `r, g, b, a` components.
    pub fn colors(&self) -> &'a [f32] {
        self.colors
    }

    pub fn get(&self, index: usize) -> Option<(Position, Color)> {
        if index >= self.len() {
            return None;
        }
        let p = index * POSITION_COMPONENTS;
        let c = index * COLOR_COMPONENTS;
        let position = [self.positions[p], self.positions[p + 1]];
        let color = [
            self.colors[c],
            self.colors[c + 1],
            self.colors[c + 2],
            self.colors[c + 3],
        ];
        Some((position, color))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, Color)> + 'a {
        let range = *self;
        (0..range.len()).filter_map(move |i| range.get(i))
    }
}
