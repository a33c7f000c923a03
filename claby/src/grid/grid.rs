use std::{fmt, ops, str::FromStr};

use hashbrown::HashSet;
use thiserror::Error;

use super::cell::{Cell, Direction};
use crate::dims::Dims;

/// Smallest side a maze laid out by [`Grid::new`] can have.
pub const MIN_SIDE: i32 = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid of size {0:?} is too small, both sides must be at least 3")]
    TooSmall(Dims),
    #[error("grid of size {0:?} has an even side, both sides must be odd")]
    EvenSize(Dims),
    #[error("unknown symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("grid diagram is empty")]
    Empty,
}

/// Rectangular array of [`Cell`]s, indexed by `Dims(row, col)`.
///
/// Mazes use an odd/even layout: cell centres sit at positions where both
/// coordinates are odd, and every position with an even coordinate is a wall
/// slot between two centres (or part of the outer border). Opening a wall slot
/// joins the two centres it separates. Only grids with odd sides of at least
/// [`MIN_SIDE`] follow this layout, which [`Grid::new`] enforces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    buf: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Creates a grid filled with walls, ready for carving.
    pub fn new(size: Dims) -> Result<Self, GridError> {
        if size.0 < MIN_SIDE || size.1 < MIN_SIDE {
            return Err(GridError::TooSmall(size));
        }

        if !size.all_odd() {
            return Err(GridError::EvenSize(size));
        }

        Ok(Self::filled(Cell::Wall, size))
    }

    /// Creates a grid of any size without checking the maze layout.
    ///
    /// Negative sides are treated as zero.
    pub fn filled(cell: Cell, size: Dims) -> Self {
        let rows = size.0.max(0) as usize;
        let cols = size.1.max(0) as usize;

        Self {
            buf: vec![cell; rows * cols],
            rows,
            cols,
        }
    }

    /// Builds a grid from rows of symbols, one character per cell.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let cols = first.as_ref().chars().count();
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let mut buf = Vec::with_capacity(rows.len() * cols);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }

            for (col, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol)
                    .ok_or(GridError::UnknownSymbol { symbol, row, col })?;
                buf.push(cell);
            }
        }

        Ok(Self {
            buf,
            rows: rows.len(),
            cols,
        })
    }

    pub fn size(&self) -> Dims {
        Dims(self.rows as i32, self.cols as i32)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        0 <= pos.0 && pos.0 < self.rows as i32 && 0 <= pos.1 && pos.1 < self.cols as i32
    }

    /// Both coordinates odd and inside the grid.
    pub fn is_cell_center(&self, pos: Dims) -> bool {
        self.is_in_bounds(pos) && pos.all_odd()
    }

    fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        self.is_in_bounds(pos)
            .then(|| pos.0 as usize * self.cols + pos.1 as usize)
    }

    fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        Some(Dims((idx / self.cols) as i32, (idx % self.cols) as i32))
    }

    pub fn get(&self, pos: Dims) -> Option<Cell> {
        self.dim_to_idx(pos).map(|i| self.buf[i])
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut Cell> {
        self.dim_to_idx(pos).map(|i| &mut self.buf[i])
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.buf.chunks(self.cols.max(1))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.buf.iter().filter(|&&c| c == cell).count()
    }

    /// First cell centre, where carving begins.
    pub fn start(&self) -> Dims {
        Dims(1, 1)
    }

    /// Opening in the left border next to [`Grid::start`].
    pub fn entrance(&self) -> Dims {
        Dims(1, 0)
    }

    /// Opening in the right border on the last row of cell centres.
    pub fn exit_door(&self) -> Dims {
        Dims(self.rows as i32 - 2, self.cols as i32 - 1)
    }

    /// Bottom-right corner, the target of path finding.
    pub fn exit(&self) -> Dims {
        Dims(self.rows as i32 - 1, self.cols as i32 - 1)
    }

    /// Removes a marked path, leaving the grid as it was before the search.
    ///
    /// Path cells go back to open, except an exit sitting where both coordinates
    /// are even: no carving opens such a slot, so the path ended on a wall.
    pub fn clear_path(&mut self) {
        for pos in self.iter_pos().collect::<Vec<_>>() {
            let cell = &mut self[pos];
            *cell = match *cell {
                Cell::Exit if pos.all_even() => Cell::Wall,
                Cell::Visited | Cell::Exit => Cell::Open,
                other => other,
            };
        }
    }

    /// Number of cells marked as a path, including its end.
    pub fn path_len(&self) -> usize {
        self.buf.iter().filter(|c| c.is_path()).count()
    }

    /// Number of non-wall cells.
    pub fn carved_count(&self) -> usize {
        self.buf.iter().filter(|c| !c.is_wall()).count()
    }

    fn is_carved(&self, pos: Dims) -> bool {
        matches!(self.get(pos), Some(c) if !c.is_wall())
    }

    /// Counts non-wall cells reachable from `from` through non-wall cells.
    pub fn reachable_from(&self, from: Dims) -> usize {
        if !self.is_carved(from) {
            return 0;
        }

        let mut seen = HashSet::with_capacity(self.buf.len());
        let mut stack = vec![from];
        seen.insert(from);

        while let Some(pos) = stack.pop() {
            for dir in Direction::get_in_order() {
                let next = pos + dir.to_coord();
                if self.is_carved(next) && seen.insert(next) {
                    stack.push(next);
                }
            }
        }

        seen.len()
    }

    /// Counts pairs of orthogonally adjacent non-wall cells.
    pub fn passage_count(&self) -> usize {
        self.iter_pos()
            .filter(|&pos| self.is_carved(pos))
            .map(|pos| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|dir| self.is_carved(pos + dir.to_coord()))
                    .count()
            })
            .sum()
    }

    /// Whether the non-wall cells form a single tree containing `from`.
    pub fn is_perfect(&self, from: Dims) -> bool {
        let carved = self.carved_count();
        carved > 0 && self.reachable_from(from) == carved && self.passage_count() + 1 == carved
    }
}

impl ops::Index<Dims> for Grid {
    type Output = Cell;

    fn index(&self, index: Dims) -> &Self::Output {
        self.dim_to_idx(index)
            .and_then(|i| self.buf.get(i))
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

impl ops::IndexMut<Dims> for Grid {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.dim_to_idx(index)
            .and_then(|i| self.buf.get_mut(i))
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

impl fmt::Display for Grid {
    /// One line per row, cell symbols separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses the compact form, one symbol per cell and one line per row.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim_matches('\n').lines().collect();
        Self::from_rows(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_layout() {
        assert_eq!(Grid::new(Dims(1, 5)), Err(GridError::TooSmall(Dims(1, 5))));
        assert_eq!(Grid::new(Dims(5, 2)), Err(GridError::TooSmall(Dims(5, 2))));
        assert_eq!(Grid::new(Dims(4, 5)), Err(GridError::EvenSize(Dims(4, 5))));
        assert_eq!(Grid::new(Dims(5, 6)), Err(GridError::EvenSize(Dims(5, 6))));

        let grid = Grid::new(Dims(3, 5)).unwrap();
        assert_eq!(grid.size(), Dims(3, 5));
        assert_eq!(grid.count(Cell::Wall), 15);
    }

    #[test]
    fn filled_accepts_degenerate_sizes() {
        assert_eq!(Grid::filled(Cell::Open, Dims(0, 4)).count(Cell::Open), 0);
        assert_eq!(Grid::filled(Cell::Open, Dims(-3, 2)).size(), Dims(0, 2));
        assert_eq!(Grid::filled(Cell::Open, Dims(2, 2)).count(Cell::Open), 4);
    }

    #[test]
    fn bounds_and_indexing() {
        let mut grid = Grid::filled(Cell::Wall, Dims(3, 4));
        assert!(grid.is_in_bounds(Dims(2, 3)));
        assert!(!grid.is_in_bounds(Dims(3, 0)));
        assert!(!grid.is_in_bounds(Dims(0, -1)));
        assert_eq!(grid.get(Dims(0, 4)), None);

        grid[Dims(2, 1)] = Cell::Open;
        assert_eq!(grid.get(Dims(2, 1)), Some(Cell::Open));
        assert_eq!(grid.iter_pos().nth(9), Some(Dims(2, 1)));
    }

    #[test]
    fn fixed_positions() {
        let grid = Grid::new(Dims(7, 9)).unwrap();
        assert_eq!(grid.start(), Dims(1, 1));
        assert_eq!(grid.entrance(), Dims(1, 0));
        assert_eq!(grid.exit_door(), Dims(5, 8));
        assert_eq!(grid.exit(), Dims(6, 8));
        assert!(grid.is_cell_center(Dims(5, 7)));
        assert!(!grid.is_cell_center(Dims(5, 8)));
        assert!(!grid.is_cell_center(Dims(7, 7)));
    }

    #[test]
    fn display_and_parse() {
        let grid: Grid = "
###
 .X
###"
        .parse()
        .unwrap();

        assert_eq!(grid.size(), Dims(3, 3));
        assert_eq!(grid[Dims(1, 0)], Cell::Open);
        assert_eq!(grid[Dims(1, 1)], Cell::Visited);
        assert_eq!(grid[Dims(1, 2)], Cell::Exit);
        assert_eq!(grid.to_string(), "# # #\n  . X\n# # #\n");
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Grid>(), Err(GridError::Empty));
        assert_eq!(
            Grid::from_rows(&["###", "##"]),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Grid::from_rows(&["#o#"]),
            Err(GridError::UnknownSymbol {
                symbol: 'o',
                row: 0,
                col: 1
            })
        );
    }

    #[test]
    fn clear_path_reopens_markers() {
        let mut grid = Grid::from_rows(&["#####", "..  #", "#.###", "#X###"]).unwrap();
        assert_eq!(grid.path_len(), 4);

        grid.clear_path();
        assert_eq!(grid.path_len(), 0);
        assert_eq!(grid, Grid::from_rows(&["#####", "    #", "# ###", "# ###"]).unwrap());

        let mut corner = Grid::from_rows(&["###", ". .", "##X"]).unwrap();
        corner.clear_path();
        assert_eq!(corner, Grid::from_rows(&["###", "   ", "###"]).unwrap());
    }

    #[test]
    fn structure_of_tree_and_cycle() {
        let split = Grid::from_rows(&["#####", "  # #", "# # #", "#####"]).unwrap();
        assert_eq!(split.carved_count(), 5);
        assert_eq!(split.reachable_from(Dims(1, 0)), 3);
        assert!(!split.is_perfect(Dims(1, 0)));

        let tree = Grid::from_rows(&["#####", "    #", "# # #", "#####"]).unwrap();
        assert_eq!(tree.passage_count(), 5);
        assert!(tree.is_perfect(Dims(1, 0)));

        let cycle = Grid::from_rows(&["####", "#  #", "#  #", "####"]).unwrap();
        assert_eq!(cycle.reachable_from(Dims(1, 1)), 4);
        assert_eq!(cycle.passage_count(), 4);
        assert!(!cycle.is_perfect(Dims(1, 1)));
        assert_eq!(cycle.reachable_from(Dims(0, 0)), 0);
    }
}
