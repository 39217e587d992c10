//! Text map of a fleet's grid.

use crate::bounds::Grid;
use crate::error::{Error, Result};
use crate::rover::Rover;
use serde::{Deserialize, Serialize};

/// Rendering options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Marker for a cell with no rover in it.
    pub empty_cell: String,
    /// Placed between cells on a row.
    pub separator: String,
    /// Joins rover indices when several rovers share one cell.
    pub collision_delimiter: String,
    /// Largest grid, in cells, that [`FieldRenderer::render_checked`] will draw.
    pub max_cells: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            empty_cell: "~".to_string(),
            separator: "\t".to_string(),
            collision_delimiter: ",".to_string(),
            max_cells: 1_000_000,
        }
    }
}

#[derive(Clone, Debug)]
enum Cell {
    Empty,
    Single(usize, char),
    Shared(Vec<usize>),
}

/// Draws every rover onto a `height x width` character grid.
///
/// Rows run from the highest `y` down to `0`, each prefixed with its `y`
/// label. The last row is the column header, `X` followed by each `x`.
/// A lone rover shows as `<index><arrow>`; a shared cell lists the indices
/// of all its rovers in deployment order.
#[derive(Clone, Debug, Default)]
pub struct FieldRenderer {
    config: RenderConfig,
}

impl FieldRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Like [`render`](Self::render), but refuses grids larger than `max_cells`.
    pub fn render_checked(&self, grid: &Grid, rovers: &[Rover]) -> Result<String> {
        let cells = grid.cell_count();
        if cells > self.config.max_cells {
            return Err(Error::FieldTooLarge {
                cells,
                max: self.config.max_cells,
            });
        }
        Ok(self.render(grid, rovers))
    }

    pub fn render(&self, grid: &Grid, rovers: &[Rover]) -> String {
        let width = grid.width() as usize;
        let height = grid.height() as usize;
        let mut cells = vec![vec![Cell::Empty; width]; height];

        for (index, rover) in rovers.iter().enumerate() {
            let pos = rover.position();
            let cell = &mut cells[pos.y as usize][pos.x as usize];
            *cell = match std::mem::replace(cell, Cell::Empty) {
                Cell::Empty => Cell::Single(index, rover.orientation().arrow()),
                Cell::Single(first, _) => Cell::Shared(vec![first, index]),
                Cell::Shared(mut indices) => {
                    indices.push(index);
                    Cell::Shared(indices)
                }
            };
        }

        let sep = &self.config.separator;
        let mut lines: Vec<String> = cells
            .iter()
            .enumerate()
            .rev()
            .map(|(y, row)| {
                let mut line = y.to_string();
                for cell in row {
                    line.push_str(sep);
                    line.push_str(&self.cell_text(cell));
                }
                line
            })
            .collect();

        let mut header = "X".to_string();
        for x in 0..width {
            header.push_str(sep);
            header.push_str(&x.to_string());
        }
        lines.push(header);

        lines.join("\n")
    }

    fn cell_text(&self, cell: &Cell) -> String {
        match cell {
            Cell::Empty => self.config.empty_cell.clone(),
            Cell::Single(index, arrow) => format!("{index}{arrow}"),
            Cell::Shared(indices) => indices
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(&self.config.collision_delimiter),
        }
    }
}
