//! Thermal frames
//!
//! One 8x8 reading from the thermal array, row-major, in degrees Celsius.
//! A frame is produced in one piece by the sampler and handed over whole through
//! the frame mailbox, so the detector never sees a half-written frame.

/// Cells per row/column of the thermal array
pub const GRID_SIZE: usize = 8;

/// Number of cells in a frame
pub const PIXEL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// One complete thermal reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThermalFrame {
    cells: [f32; PIXEL_COUNT],
}

impl ThermalFrame {
    pub const fn new(cells: [f32; PIXEL_COUNT]) -> Self {
        Self { cells }
    }

    /// Frame with every cell at the same temperature
    pub const fn uniform(temperature: f32) -> Self {
        Self::new([temperature; PIXEL_COUNT])
    }

    /// Copy of this frame with one cell replaced
    pub fn with_cell(mut self, index: usize, temperature: f32) -> Self {
        self.cells[index] = temperature;
        self
    }

    /// Cells in index order
    pub fn cells(&self) -> &[f32; PIXEL_COUNT] {
        &self.cells
    }

    /// Temperature of one cell
    pub fn cell(&self, index: usize) -> f32 {
        self.cells[index]
    }

    /// Hottest cell at or after `start` as `(index, temperature)`
    ///
    /// Ties keep the lower index. `start` must be below [`PIXEL_COUNT`].
    pub fn hottest_from(&self, start: usize) -> (usize, f32) {
        let mut peak = (start, self.cells[start]);
        for (index, &temperature) in self.cells.iter().enumerate().skip(start + 1) {
            if temperature > peak.1 {
                peak = (index, temperature);
            }
        }
        peak
    }
}
