//! Grid layout calculation
//!
//! This module computes where each card cell sits on the page: the grid
//! bounding box centered on the sheet, row-major cell positions for the
//! front, and the horizontally mirrored positions for the back so that
//! both faces of a card coincide after duplex printing and cutting.
//!
//! Everything here works in millimeters and is a pure function of the
//! spec; conversion to output-device units is the renderer's concern.

use crate::options::SheetSpec;
use crate::types::SheetSide;

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column on the front side)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Derived grid geometry for one sheet
///
/// The grid of `grid_size` x `grid_size` bleed-inclusive cells is centered
/// on the page; `margin_x`/`margin_y` are the distances from the page edges
/// to the grid bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    /// Cell width including bleed
    pub cell_width_mm: f32,
    /// Cell height including bleed
    pub cell_height_mm: f32,
    /// Cards per row and per column
    pub grid_size: usize,
    /// Total grid width
    pub grid_width_mm: f32,
    /// Total grid height
    pub grid_height_mm: f32,
    /// Horizontal distance from page edge to grid bounding box
    pub margin_x_mm: f32,
    /// Vertical distance from page edge to grid bounding box
    pub margin_y_mm: f32,
}

impl GridGeometry {
    /// Derive the geometry for a spec.
    pub fn new(spec: &SheetSpec) -> Self {
        let cell_width_mm = spec.cell_width_mm();
        let cell_height_mm = spec.cell_height_mm();
        let grid_width_mm = spec.grid_size as f32 * cell_width_mm;
        let grid_height_mm = spec.grid_size as f32 * cell_height_mm;

        Self {
            page_width_mm: spec.page_width_mm,
            page_height_mm: spec.page_height_mm,
            cell_width_mm,
            cell_height_mm,
            grid_size: spec.grid_size,
            grid_width_mm,
            grid_height_mm,
            margin_x_mm: (spec.page_width_mm - grid_width_mm) / 2.0,
            margin_y_mm: (spec.page_height_mm - grid_height_mm) / 2.0,
        }
    }

    /// Total number of cells in the grid
    pub fn cells(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Row-major position of a cell index (left-to-right, top-to-bottom)
    pub fn position(&self, index: usize) -> GridPosition {
        GridPosition::new(index / self.grid_size, index % self.grid_size)
    }

    /// Bottom-left corner of a cell's bleed-inclusive box in page space
    /// (origin at the bottom-left of the page).
    ///
    /// The fill order is defined by the cell index on the FRONT side; the
    /// back side keeps the same index and row but mirrors the column, so
    /// flipping the printed sheet along its vertical axis brings each
    /// card's back over its front.
    pub fn cell_origin(&self, index: usize, side: SheetSide) -> (f32, f32) {
        let pos = self.position(index);

        // Row 0 is visually topmost; the page origin is bottom-left.
        let y = self.page_height_mm
            - (self.margin_y_mm + pos.row as f32 * self.cell_height_mm + self.cell_height_mm);

        let x = match side {
            SheetSide::Front => self.margin_x_mm + pos.col as f32 * self.cell_width_mm,
            SheetSide::Back => {
                self.page_width_mm
                    - (self.margin_x_mm
                        + pos.col as f32 * self.cell_width_mm
                        + self.cell_width_mm)
            }
        };

        (x, y)
    }
}

// =============================================================================
// Tests
// =============================================================================
