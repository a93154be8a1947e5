use crate::storage::Position;

/// Maps a pixel position inside a `width` x `height` area to normalized
/// device coordinates. Pixel y grows downward, NDC y grows upward.
pub fn to_ndc(x: f64, y: f64, width: f64, height: f64) -> Position {
    let width = width.max(1.0);
    let height = height.max(1.0);

    let ndc_x = 2.0 * x / width - 1.0;
    let ndc_y = 1.0 - 2.0 * y / height;

    [ndc_x as f32, ndc_y as f32]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_maps_to_origin() {
        assert_eq!(to_ndc(250.0, 150.0, 500.0, 300.0), [0.0, 0.0]);
    }

    #[test]
    fn corners_map_to_unit_square() {
        assert_eq!(to_ndc(0.0, 0.0, 500.0, 300.0), [-1.0, 1.0]);
        assert_eq!(to_ndc(500.0, 300.0, 500.0, 300.0), [1.0, -1.0]);
        assert_eq!(to_ndc(500.0, 0.0, 500.0, 300.0), [1.0, 1.0]);
    }

    #[test]
    fn degenerate_size_does_not_divide_by_zero() {
        let [x, y] = to_ndc(0.0, 0.0, 0.0, 0.0);
        assert!(x.is_finite() && y.is_finite());
    }
}
