use crate::dims::Dims;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Wall,
    Open,
    /// Marks a cell on the path currently being searched.
    Visited,
    /// End of a found path.
    Exit,
}

impl Cell {
    pub const fn symbol(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open => ' ',
            Cell::Visited => '.',
            Cell::Exit => 'X',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '#' => Some(Cell::Wall),
            ' ' => Some(Cell::Open),
            '.' => Some(Cell::Visited),
            'X' => Some(Cell::Exit),
            _ => None,
        }
    }

    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }

    pub fn is_open(self) -> bool {
        self == Cell::Open
    }

    /// Part of a marked path, either an intermediate step or its end.
    pub fn is_path(self) -> bool {
        matches!(self, Cell::Visited | Cell::Exit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Order in which the path finder tries its neighbours.
    pub fn get_in_order() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    pub fn to_coord(self) -> Dims {
        match self {
            Direction::Up => Dims(-1, 0),
            Direction::Down => Dims(1, 0),
            Direction::Left => Dims(0, -1),
            Direction::Right => Dims(0, 1),
        }
    }

    /// Offset from one cell centre to the next one, skipping the wall between them.
    pub fn jump(self) -> Dims {
        self.to_coord() * 2
    }
}
