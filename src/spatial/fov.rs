//! Field of view by recursive shadowcasting
//!
//! Each of the eight octants is scanned row by row outward from the origin.
//! An opaque cell starts a shadow; the scan recurses into the still-lit slope
//! range and resumes once the shadow ends. Opaque cells that are hit are
//! themselves lit, so walls bordering a room are visible.

use crate::core::types::Point;
use crate::spatial::grid::Grid;

/// Octant transforms as (xx, xy, yx, yy)
const OCTANTS: [(i32, i32, i32, i32); 8] = [
    (1, 0, 0, 1),
    (0, 1, 1, 0),
    (0, -1, 1, 0),
    (-1, 0, 0, 1),
    (-1, 0, 0, -1),
    (0, -1, -1, 0),
    (0, 1, -1, 0),
    (1, 0, 0, -1),
];

/// Overwrite `visible` with the cells seen from `origin` within `radius`.
/// Cells outside the grid count as opaque.
pub fn compute_fov(
    visible: &mut Grid<bool>,
    origin: Point,
    radius: i32,
    is_transparent: &dyn Fn(i32, i32) -> bool,
) {
    visible.fill(false);
    if !visible.in_bounds(origin.0, origin.1) {
        return;
    }
    visible.set(origin.0, origin.1, true);

    for &octant in &OCTANTS {
        cast_light(visible, origin, radius, 1, 1.0, 0.0, octant, is_transparent);
    }
}

#[allow(clippy::too_many_arguments)]
fn cast_light(
    visible: &mut Grid<bool>,
    origin: Point,
    radius: i32,
    row: i32,
    mut start_slope: f64,
    end_slope: f64,
    (xx, xy, yx, yy): (i32, i32, i32, i32),
    is_transparent: &dyn Fn(i32, i32) -> bool,
) {
    if start_slope < end_slope {
        return;
    }
    let radius_sq = radius * radius;
    let (width, height) = (visible.width, visible.height);
    let opaque =
        |x: i32, y: i32| x < 0 || y < 0 || x >= width || y >= height || !is_transparent(x, y);

    for distance in row..=radius {
        let dy = -distance;
        let mut dx = -distance - 1;
        let mut blocked = false;
        let mut next_start = start_slope;

        while dx <= 0 {
            dx += 1;
            let x = origin.0 + dx * xx + dy * xy;
            let y = origin.1 + dx * yx + dy * yy;
            let left_slope = (dx as f64 - 0.5) / (dy as f64 + 0.5);
            let right_slope = (dx as f64 + 0.5) / (dy as f64 - 0.5);

            if start_slope < right_slope {
                continue;
            }
            if end_slope > left_slope {
                break;
            }

            if dx * dx + dy * dy <= radius_sq {
                visible.set(x, y, true);
            }

            let cell_opaque = opaque(x, y);
            if blocked {
                if cell_opaque {
                    next_start = right_slope;
                    continue;
                }
                blocked = false;
                start_slope = next_start;
            } else if cell_opaque && distance < radius {
                blocked = true;
                cast_light(
                    visible,
                    origin,
                    radius,
                    distance + 1,
                    start_slope,
                    left_slope,
                    (xx, xy, yx, yy),
                    is_transparent,
                );
                next_start = right_slope;
            }
        }

        if blocked {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(_: i32, _: i32) -> bool {
        true
    }

    #[test]
    fn test_open_field_respects_radius() {
        let mut visible = Grid::new(21, 21, false);
        compute_fov(&mut visible, (10, 10), 3, &open);

        assert!(visible.is_set(10, 10));
        assert!(visible.is_set(13, 10));
        assert!(visible.is_set(10, 7));
        assert!(visible.is_set(12, 12));
        assert!(!visible.is_set(14, 10));
        assert!(!visible.is_set(13, 13));
    }

    #[test]
    fn test_wall_casts_shadow() {
        // Vertical wall at x = 5 spanning the whole map
        let wall = |x: i32, _y: i32| x != 5;
        let mut visible = Grid::new(11, 11, false);
        compute_fov(&mut visible, (2, 5), 8, &wall);

        // The wall itself is lit, everything behind it is not
        assert!(visible.is_set(5, 5));
        assert!(visible.is_set(4, 5));
        for y in 0..11 {
            assert!(!visible.is_set(6, y), "cell (6, {y}) should be hidden");
            assert!(!visible.is_set(9, y));
        }
    }

    #[test]
    fn test_origin_outside_grid_sees_nothing() {
        let mut visible = Grid::new(5, 5, true);
        compute_fov(&mut visible, (-1, 2), 4, &open);
        assert_eq!(visible.count_set(), 0);
    }

    #[test]
    fn test_visibility_is_symmetric_in_open_room() {
        let mut from_a = Grid::new(15, 15, false);
        let mut from_b = Grid::new(15, 15, false);
        compute_fov(&mut from_a, (3, 3), 6, &open);
        compute_fov(&mut from_b, (7, 5), 6, &open);
        assert_eq!(from_a.is_set(7, 5), from_b.is_set(3, 3));
    }
}
