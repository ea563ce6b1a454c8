use serde::{Deserialize, Serialize};

/// Layout parameters of the photo grid, in CSS pixels.
///
/// The defaults reproduce the phone layout: columns at least 200 wide,
/// cells 1.5 times wider than tall, 4 pixel container inset and
/// 4 pixel margin around every cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    /// Minimum width of a column
    pub min_column_width: f64,
    /// Width divided by height of every cell
    pub aspect_ratio: f64,
    /// Horizontal inset of the grid container
    pub horizontal_inset: f64,
    /// Margin on all four sides of each cell
    pub cell_margin: f64,
    /// Caller supplied padding around the grid content
    pub content_padding: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            min_column_width: 200.0,
            aspect_ratio: 1.5,
            horizontal_inset: 4.0,
            cell_margin: 4.0,
            content_padding: 0.0,
        }
    }
}

impl GridLayout {
    /// Number of columns that fit into `available_width`, never less than one
    pub fn columns_for(&self, available_width: f64) -> usize {
        if !available_width.is_finite() || available_width <= 0.0 {
            return 1;
        }
        if !self.min_column_width.is_finite() || self.min_column_width <= 0.0 {
            return 1;
        }
        ((available_width / self.min_column_width).floor() as usize).max(1)
    }

    /// Style of the grid container.
    ///
    /// Without a measured column count the browser fills columns on its own
    /// using the same minimum width.
    pub fn grid_style(&self, columns: Option<usize>) -> String {
        let template = match columns {
            Some(n) => format!("repeat({}, minmax(0, 1fr))", n.max(1)),
            None => format!(
                "repeat(auto-fill, minmax({}px, 1fr))",
                self.min_column_width
            ),
        };
        let vertical = self.content_padding;
        let horizontal = self.content_padding + self.horizontal_inset;
        format!(
            "display: grid; grid-template-columns: {}; padding: {}px {}px; box-sizing: border-box; width: 100%;",
            template, vertical, horizontal
        )
    }

    /// Style of a single cell box
    pub fn cell_style(&self) -> String {
        format!(
            "position: relative; margin: {}px; aspect-ratio: {}; overflow: hidden;",
            self.cell_margin, self.aspect_ratio
        )
    }
}
