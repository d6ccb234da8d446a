//! Grid dimensions.

/// Default number of rows (and columns) of a grid.
pub const DEFAULT_ROWS: i32 = 50;

/// Default side length, in pixels, of the square surface a grid is drawn on.
pub const DEFAULT_WINDOW_WIDTH: i32 = 800;

/// Configuration for building a [`Grid`](crate::Grid).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Cells per side. The grid is always square.
    pub total_rows: i32,
    /// Pixel width of the drawing surface, used only to derive
    /// [`cell_size`](Self::cell_size).
    pub window_width: i32,
}

impl GridConfig {
    /// A config with `total_rows` rows on the default surface.
    pub fn with_rows(total_rows: i32) -> Self {
        Self {
            total_rows,
            ..Self::default()
        }
    }

    /// Pixel side of one cell (`window_width / total_rows`, 0 for an empty
    /// grid).
    pub fn cell_size(&self) -> i32 {
        if self.total_rows <= 0 {
            return 0;
        }
        self.window_width / self.total_rows
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            total_rows: DEFAULT_ROWS,
            window_width: DEFAULT_WINDOW_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_size() {
        assert_eq!(GridConfig::default().cell_size(), 16);
        assert_eq!(GridConfig::with_rows(0).cell_size(), 0);
        assert_eq!(GridConfig::with_rows(3).cell_size(), 266);
    }
}
