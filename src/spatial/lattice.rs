//! Fixed-size 2D lattice with a world-coordinate transform
//!
//! Elements are indexed by cell coordinate (`[x, y]`) so that
//! iteration visits x in the outer loop and y in the inner loop, which is the
//! order every backfill pass relies on.
//!
//! The forward transform anchors cell `(x, y)` at
//! `origin + (x - ½, y - ½) · cell_size`; the inverse adds the half cell back
//! before rounding, so a cell centre always resolves to its own cell.

use ndarray::Array2;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::position::Position;

/// Generic fixed-size addressable 2D store
#[derive(Debug, Clone)]
pub struct Lattice<T> {
    cells: Array2<T>,
    cell_size: f32,
    origin: Position,
}

impl<T> Lattice<T> {
    /// Build a `width` x `height` lattice, creating each element with `cell_factory(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or the cell
    /// size is not a positive finite number.
    pub fn new<F>(
        width: usize,
        height: usize,
        cell_size: f32,
        origin: Position,
        mut cell_factory: F,
    ) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        if width == 0 {
            return Err(invalid_parameter(
                "width",
                &width,
                &"lattice width must be positive",
            ));
        }
        if height == 0 {
            return Err(invalid_parameter(
                "height",
                &height,
                &"lattice height must be positive",
            ));
        }
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(invalid_parameter(
                "cell_size",
                &cell_size,
                &"must be a positive finite number",
            ));
        }

        let cells = Array2::from_shape_fn((width, height), |(x, y)| cell_factory(x, y));

        Ok(Self {
            cells,
            cell_size,
            origin,
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.ncols()
    }

    /// Edge length of one cell, fixed at construction
    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// World position the transform is anchored to
    pub const fn origin(&self) -> Position {
        self.origin
    }

    /// Whether `(x, y)` addresses an element
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Element at `(x, y)`, or `None` when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        let index = self.index(x, y)?;
        self.cells.get(index)
    }

    /// Mutable element at `(x, y)`, or `None` when out of bounds
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut T> {
        let index = self.index(x, y)?;
        self.cells.get_mut(index)
    }

    /// Element whose cell the world position rounds to
    pub fn get_at(&self, position: Position) -> Option<&T> {
        let (x, y) = self.coordinates_at(position)?;
        self.get(x, y)
    }

    /// Mutable element whose cell the world position rounds to
    pub fn get_at_mut(&mut self, position: Position) -> Option<&mut T> {
        let (x, y) = self.coordinates_at(position)?;
        self.get_mut(x, y)
    }

    /// World position of the centre anchor of `(x, y)`
    ///
    /// Pure transform: coordinates outside the lattice extrapolate linearly.
    // Kept unfused so results match `coord * size - size / 2 + origin` bit for bit
    #[allow(clippy::suboptimal_flops)]
    pub fn cell_center(&self, x: i32, y: i32) -> Position {
        let half = self.cell_size / 2.0;
        Position::with_depth(
            x as f32 * self.cell_size - half + self.origin.x,
            y as f32 * self.cell_size - half + self.origin.y,
            self.origin.z,
        )
    }

    /// Lattice coordinates nearest to a world position, if inside the lattice
    pub fn coordinates_at(&self, position: Position) -> Option<(i32, i32)> {
        let fx = ((position.x - self.origin.x) / self.cell_size + 0.5).round();
        let fy = ((position.y - self.origin.y) / self.cell_size + 0.5).round();
        if !(fx.is_finite() && fy.is_finite()) {
            return None;
        }

        // Float casts saturate, so huge values land outside the lattice
        let (x, y) = (fx as i32, fy as i32);
        self.contains(x, y).then_some((x, y))
    }

    /// Every coordinate pair, x outer and y inner
    pub fn coordinates(&self) -> impl Iterator<Item = (i32, i32)> + use<T> {
        let (width, height) = (self.width(), self.height());
        (0..width).flat_map(move |x| (0..height).map(move |y| (x as i32, y as i32)))
    }

    /// Elements with their coordinates, x outer and y inner
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), &T)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((x, y), cell)| ((x as i32, y as i32), cell))
    }

    fn index(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let ix = usize::try_from(x).ok()?;
        let iy = usize::try_from(y).ok()?;
        (ix < self.width() && iy < self.height()).then_some((ix, iy))
    }
}
