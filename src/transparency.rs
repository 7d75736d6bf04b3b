use crate::color::RGBAColorFormat;
use crate::flood_fill::ReachableSet;
use crate::grid::PixelGrid;

/// Overwrites every reached dot with transparent white and returns how many
/// dots were written. Dots outside the set are left untouched.
pub fn apply_transparency(grid: &mut PixelGrid, reachable: &ReachableSet) -> usize {
    let mut count = 0;
    for coordinate in reachable.iter() {
        grid.set_dot(coordinate, RGBAColorFormat::TRANSPARENT_WHITE);
        count += 1;
    }
    count
}

#[cfg(test)]
mod test {
    use super::apply_transparency;
    use crate::background::BackgroundPredicate;
    use crate::color::RGBAColorFormat;
    use crate::flood_fill::compute_reachable;
    use crate::grid::{Coordinate, PixelGrid};

    const BACKGROUND: RGBAColorFormat = RGBAColorFormat::opaque(250, 250, 250);
    const FOREGROUND: RGBAColorFormat = RGBAColorFormat::opaque(10, 10, 10);

    #[test]
    fn background_becomes_transparent_white() {
        let mut grid = PixelGrid::filled(4, 4, BACKGROUND);
        grid.set_dot(Coordinate::new(2, 2), FOREGROUND);
        let reachable = compute_reachable(&grid, &BackgroundPredicate::default());
        let count = apply_transparency(&mut grid, &reachable);
        assert_eq!(count, 15);
        for y in 0..4 {
            for x in 0..4 {
                let expected = if (x, y) == (2, 2) {
                    FOREGROUND
                } else {
                    RGBAColorFormat::TRANSPARENT_WHITE
                };
                assert_eq!(
                    grid.dot(Coordinate::new(x, y)),
                    expected,
                    "dot ({}, {}) is wrong",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let mut grid = PixelGrid::filled(3, 3, BACKGROUND);
        grid.set_dot(Coordinate::new(1, 1), FOREGROUND);
        let reachable = compute_reachable(&grid, &BackgroundPredicate::default());
        apply_transparency(&mut grid, &reachable);
        let once = grid.clone();
        apply_transparency(&mut grid, &reachable);
        assert_eq!(grid, once);
    }

    #[test]
    fn empty_set_changes_nothing() {
        let mut grid = PixelGrid::filled(2, 2, RGBAColorFormat::opaque(0, 0, 0));
        let original = grid.clone();
        let reachable = compute_reachable(&grid, &BackgroundPredicate::default());
        assert_eq!(apply_transparency(&mut grid, &reachable), 0);
        assert_eq!(grid, original);
    }

    #[test]
    fn enclosed_white_keeps_its_alpha() {
        let mut grid = PixelGrid::filled(5, 5, BACKGROUND);
        for index in 1..4 {
            grid.set_dot(Coordinate::new(index, 1), FOREGROUND);
            grid.set_dot(Coordinate::new(index, 3), FOREGROUND);
            grid.set_dot(Coordinate::new(1, index), FOREGROUND);
            grid.set_dot(Coordinate::new(3, index), FOREGROUND);
        }
        let reachable = compute_reachable(&grid, &BackgroundPredicate::default());
        apply_transparency(&mut grid, &reachable);
        assert_eq!(grid.dot(Coordinate::new(2, 2)), BACKGROUND);
        assert_eq!(
            grid.dot(Coordinate::new(0, 2)),
            RGBAColorFormat::TRANSPARENT_WHITE
        );
    }

    #[test]
    fn partially_transparent_foreground_is_preserved() {
        let translucent = RGBAColorFormat::new(30, 60, 90, 128);
        let mut grid = PixelGrid::filled(3, 1, BACKGROUND);
        grid.set_dot(Coordinate::new(1, 0), translucent);
        let reachable = compute_reachable(&grid, &BackgroundPredicate::default());
        assert_eq!(apply_transparency(&mut grid, &reachable), 2);
        assert_eq!(grid.dot(Coordinate::new(1, 0)), translucent);
    }
}
