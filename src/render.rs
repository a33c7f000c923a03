use claby::grid::{Cell, Grid};
use colored::Colorize as _;

use crate::settings::{Settings, Symbols};

/// Turns a grid into console text using the configured symbols.
#[derive(Debug, Clone)]
pub struct Renderer {
    symbols: Symbols,
    color: bool,
}

impl Renderer {
    pub fn new(symbols: Symbols, color: bool) -> Self {
        Self { symbols, color }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.get_symbols(), settings.get_color())
    }

    /// One line per row, symbols separated by single spaces.
    pub fn render(&self, grid: &Grid) -> String {
        let mut out = String::with_capacity(grid.rows() * (grid.cols() * 2 + 1));

        for row in grid.iter_rows() {
            for (i, &cell) in row.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(&self.symbol(cell));
            }
            out.push('\n');
        }

        out
    }

    fn symbol(&self, cell: Cell) -> String {
        let symbol = self.symbols.of(cell).to_string();
        if !self.color {
            return symbol;
        }

        match cell {
            Cell::Visited => symbol.green().to_string(),
            Cell::Exit => symbol.red().bold().to_string(),
            Cell::Wall | Cell::Open => symbol,
        }
    }
}
