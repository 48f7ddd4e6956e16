//! Unfolded 2D display of all six faces.

use std::collections::BTreeMap;
use std::fmt;

use cube_core::{Color, CubeState, Face, Grid};

/// Position of each face in the unfolded net, as `(face, row, column)` in
/// units of whole faces.
///
/// ```text
///     U
///   L F R B
///     D
/// ```
pub const NET_LAYOUT: [(Face, usize, usize); 6] = [
    (Face::U, 0, 1),
    (Face::L, 1, 0),
    (Face::F, 1, 1),
    (Face::R, 1, 2),
    (Face::B, 1, 3),
    (Face::D, 2, 1),
];

/// Returns the face drawn at a position in [`NET_LAYOUT`], if any.
pub fn net_face_at(net_row: usize, net_col: usize) -> Option<Face> {
    NET_LAYOUT
        .iter()
        .find(|&&(_, r, c)| (r, c) == (net_row, net_col))
        .map(|&(face, _, _)| face)
}

/// Display with one addressable element per face and nine cells inside each.
pub trait NetSurface {
    /// Sets the color of cell `cell_element_id` inside face element
    /// `face_element_id`.
    fn paint(&mut self, face_element_id: &str, cell_element_id: &str, color: Color);
}

/// Returns the element ID for a face, such as `face-up`.
pub fn face_element_id(face: Face) -> String {
    format!("face-{}", face.name())
}
/// Returns the element ID for cell `index` of a face, in reading order from
/// `face-color-0` to `face-color-8`.
pub fn cell_element_id(index: usize) -> String {
    format!("face-color-{index}")
}

/// Paints every cell of every face. Centers always show the face's home
/// color.
pub fn render_net(state: &CubeState, surface: &mut impl NetSurface) {
    for face in Face::ALL {
        let face_id = face_element_id(face);
        for (i, color) in state.grid(face).into_iter().flatten().enumerate() {
            surface.paint(&face_id, &cell_element_id(i), color);
        }
    }
}

/// In-memory [`NetSurface`] that records the last color painted into each
/// cell.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NetSnapshot {
    cells: BTreeMap<(String, String), Color>,
    paint_count: usize,
}

impl NetSurface for NetSnapshot {
    fn paint(&mut self, face_element_id: &str, cell_element_id: &str, color: Color) {
        self.cells
            .insert((face_element_id.to_owned(), cell_element_id.to_owned()), color);
        self.paint_count += 1;
    }
}

impl NetSnapshot {
    /// Constructs a snapshot of `state`.
    pub fn of(state: &CubeState) -> Self {
        let mut ret = Self::default();
        render_net(state, &mut ret);
        ret
    }

    /// Returns the color painted into a cell, if any.
    pub fn cell(&self, face: Face, index: usize) -> Option<Color> {
        self.cells
            .get(&(face_element_id(face), cell_element_id(index)))
            .copied()
    }
    /// Returns the grid painted for a face, if all of its cells have been
    /// painted.
    pub fn grid(&self, face: Face) -> Option<Grid> {
        let mut grid = [[face.home_color(); 3]; 3];
        for (i, cell) in grid.iter_mut().flatten().enumerate() {
            *cell = self.cell(face, i)?;
        }
        Some(grid)
    }
    /// Returns the total number of paint calls received.
    pub fn paint_count(&self) -> usize {
        self.paint_count
    }
}

impl fmt::Display for NetSnapshot {
    /// Writes the net as rows of color initials, with `.` for unpainted
    /// cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for net_row in 0..3 {
            for cell_row in 0..3 {
                let mut line = String::new();
                for net_col in 0..4 {
                    let face = net_face_at(net_row, net_col);
                    for cell_col in 0..3 {
                        line.push(match face {
                            Some(face) => self
                                .cell(face, cell_row * 3 + cell_col)
                                .map_or('.', Color::symbol),
                            None => ' ',
                        });
                    }
                    line.push(' ');
                }
                writeln!(f, "{}", line.trim_end())?;
            }
        }
        Ok(())
    }
}
