//! 2-D grid, positions and compass directions

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

use anyhow::{anyhow, bail};

/// Signed grid coordinate; `x` grows to the right, `y` grows downwards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub x: i64,
    pub y: i64,
}

impl Pos {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbors, not bounds checked
    pub fn adjacent(self) -> [Pos; 4] {
        Dir::ALL.map(|dir| self + dir.delta())
    }

    pub fn manhattan(self, other: Pos) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl Add for Pos {
    type Output = Pos;

    fn add(self, rhs: Pos) -> Pos {
        Pos::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Pos {
    fn add_assign(&mut self, rhs: Pos) {
        *self = *self + rhs;
    }
}

impl Sub for Pos {
    type Output = Pos;

    fn sub(self, rhs: Pos) -> Pos {
        Pos::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i64> for Pos {
    type Output = Pos;

    fn mul(self, rhs: i64) -> Pos {
        Pos::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Compass direction, clockwise from north
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dir {
    North,
    East,
    South,
    West,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::North, Dir::East, Dir::South, Dir::West];

    pub fn delta(self) -> Pos {
        match self {
            Dir::North => Pos::new(0, -1),
            Dir::East => Pos::new(1, 0),
            Dir::South => Pos::new(0, 1),
            Dir::West => Pos::new(-1, 0),
        }
    }

    pub fn turn_right(self) -> Dir {
        match self {
            Dir::North => Dir::East,
            Dir::East => Dir::South,
            Dir::South => Dir::West,
            Dir::West => Dir::North,
        }
    }

    pub fn turn_left(self) -> Dir {
        match self {
            Dir::North => Dir::West,
            Dir::West => Dir::South,
            Dir::South => Dir::East,
            Dir::East => Dir::North,
        }
    }

    /// Parse `^`, `>`, `v` or `<`
    pub fn from_arrow(c: char) -> Option<Dir> {
        match c {
            '^' => Some(Dir::North),
            '>' => Some(Dir::East),
            'v' => Some(Dir::South),
            '<' => Some(Dir::West),
            _ => None,
        }
    }
}

/// Row-major rectangular grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// A grid filled with `value`
    pub fn filled(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: Pos) -> bool {
        (0..self.width as i64).contains(&pos.x) && (0..self.height as i64).contains(&pos.y)
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.y as usize * self.width + pos.x as usize)
    }

    /// `None` outside the grid
    pub fn get(&self, pos: Pos) -> Option<&T> {
        self.index(pos).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
        self.index(pos).map(|i| &mut self.cells[i])
    }

    /// Overwrite the cell at `pos`; returns `false` outside the grid
    pub fn set(&mut self, pos: Pos, value: T) -> bool {
        match self.get_mut(pos) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Every in-bounds position, row by row
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<T> {
        let (width, height) = (self.width as i64, self.height as i64);
        (0..height).flat_map(move |y| (0..width).map(move |x| Pos::new(x, y)))
    }

    /// Cells paired with their position, row by row
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &T)> {
        self.positions().zip(self.cells.iter())
    }

    /// Orthogonal neighbors that lie inside the grid
    pub fn neighbors4(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        pos.adjacent().into_iter().filter(|&p| self.contains(p))
    }

    /// Position of the first cell (row-major) matching `predicate`
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<Pos> {
        self.iter().find(|(_, cell)| predicate(*cell)).map(|(pos, _)| pos)
    }

    /// Dense index of `pos`, for use with index-keyed tables
    pub fn flat_index(&self, pos: Pos) -> Option<usize> {
        self.index(pos)
    }

    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl Grid<u8> {
    /// Parse a rectangular block of ASCII characters
    pub fn parse(input: &str) -> anyhow::Result<Self> {
        let rows: Vec<&[u8]> = super::text::lines(input).map(str::as_bytes).collect();
        let Some(first) = rows.first() else {
            bail!("empty grid");
        };
        let width = first.len();
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(anyhow!(
                "row {} has width {}, expected {width}",
                y + 1,
                row.len()
            ));
        }
        Ok(Self {
            width,
            height: rows.len(),
            cells: rows.concat(),
        })
    }

    /// Position of the first `byte`, or an error naming it
    pub fn find_byte(&self, byte: u8) -> anyhow::Result<Pos> {
        self.find(|&c| c == byte)
            .ok_or_else(|| anyhow!("no {:?} in grid", byte as char))
    }
}

impl fmt::Display for Grid<u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            writeln!(f, "{}", String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}
