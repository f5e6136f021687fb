//! Generic grid for per-cell data

use serde::{Deserialize, Serialize};

/// Row-major width×height grid addressed by signed coordinates.
/// Out-of-range reads return `None`, out-of-range writes are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid<T: Clone> {
    pub width: i32,
    pub height: i32,
    data: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: i32, height: i32, fill: T) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            data: vec![fill; (width * height) as usize],
        }
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some((y * self.width + x) as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        self.index(x, y).map(|i| &self.data[i])
    }

    #[inline]
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut T> {
        self.index(x, y).map(move |i| &mut self.data[i])
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        if let Some(i) = self.index(x, y) {
            self.data[i] = value;
        }
    }

    pub fn fill(&mut self, value: T) {
        for cell in &mut self.data {
            *cell = value.clone();
        }
    }

    /// Iterate `((x, y), &value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), &T)> + '_ {
        let width = self.width;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| (((i as i32) % width, (i as i32) / width), v))
    }
}

impl Grid<bool> {
    /// Cell-wise OR with another grid of the same size
    pub fn union_with(&mut self, other: &Grid<bool>) {
        for (cell, &o) in self.data.iter_mut().zip(other.data.iter()) {
            *cell |= o;
        }
    }

    /// True when every cell set in `other` is also set here
    pub fn is_superset_of(&self, other: &Grid<bool>) -> bool {
        self.data.iter().zip(other.data.iter()).all(|(&a, &b)| a || !b)
    }

    pub fn count_set(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    #[inline]
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        self.get(x, y).copied().unwrap_or(false)
    }
}
