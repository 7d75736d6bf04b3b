use std::collections::VecDeque;

use crate::background::PixelPredicate;
use crate::grid::{Coordinate, PixelGrid};

/// The dots connected to a qualifying corner through matching dots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReachableSet {
    width: u32,
    height: u32,
    visited: Vec<bool>,
    count: usize,
}

impl ReachableSet {
    fn empty(grid: &PixelGrid) -> Self {
        ReachableSet {
            width: grid.width(),
            height: grid.height(),
            visited: vec![false; grid.len()],
            count: 0,
        }
    }

    /// Returns false if the coordinate was already part of the set.
    fn insert(&mut self, index: usize) -> bool {
        if self.visited[index] {
            return false;
        }
        self.visited[index] = true;
        self.count += 1;
        true
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x < self.width
            && coordinate.y < self.height
            && self.visited[coordinate.y as usize * self.width as usize + coordinate.x as usize]
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Coordinates in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let width = self.width as usize;
        self.visited
            .iter()
            .enumerate()
            .filter(|(_, visited)| **visited)
            .map(move |(index, _)| Coordinate::new((index % width) as u32, (index / width) as u32))
    }
}

/// Breadth-first fill over 4-connected neighbors, seeded from the grid corners.
///
/// Corners that don't satisfy the predicate are not seeded, so a grid without
/// any qualifying corner yields an empty set.
pub fn compute_reachable<P: PixelPredicate>(grid: &PixelGrid, predicate: &P) -> ReachableSet {
    let mut reachable = ReachableSet::empty(grid);
    let mut frontier: VecDeque<Coordinate> = VecDeque::new();

    for corner in grid.corners() {
        if predicate.matches(&grid.dot(corner)) && reachable.insert(grid.index(corner)) {
            frontier.push_back(corner);
        }
    }
    log::debug!(
        "Seeding fill of {}x{} grid from {} corner(s)",
        grid.width(),
        grid.height(),
        frontier.len()
    );

    while let Some(current) = frontier.pop_front() {
        for neighbor in grid.neighbors(current) {
            let index = grid.index(neighbor);
            if reachable.visited[index] {
                continue;
            }
            if predicate.matches(&grid.dot(neighbor)) {
                reachable.insert(index);
                frontier.push_back(neighbor);
            }
        }
    }

    reachable
}
