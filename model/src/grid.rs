use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    /// Column-major 2d, blocks of a single columns (increasing y) are stored sequentially.
    inner: Vec<T>,
}

impl<T> Grid<T> {
    pub fn fill_with_clone(item: T, width: usize, height: usize) -> Grid<T>
    where
        T: Clone,
    {
        Grid {
            inner: vec![item; width * height],
            width,
            height,
        }
    }

    /// Builds a grid from rows (the order a human writes a map in), transposing into the column
    /// major layout. Every row must be exactly `width` long.
    pub fn from_rows(rows: Vec<Vec<T>>, width: usize) -> Grid<T>
    where
        T: Clone,
    {
        let height = rows.len();
        let mut inner = Vec::with_capacity(width * height);
        for x in 0..width {
            for row in &rows {
                inner.push(row[x].clone());
            }
        }

        Grid {
            inner,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bounds checked access, negative or too large coordinates give None
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }

        self.inner.get(x as usize * self.height + y as usize)
    }

    /// Iterates over every cell as `(x, y, item)`, column by column.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let height = self.height;
        self.inner
            .iter()
            .enumerate()
            .map(move |(i, item)| (i / height, i % height, item))
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.width * self.height, self.inner.len());
        self.inner.len()
    }
}

impl<T> Index<usize> for Grid<T> {
    type Output = [T];

    fn index(&self, x: usize) -> &Self::Output {
        let start = x * self.height;
        &self.inner[start..start + self.height]
    }
}

impl<T> IndexMut<usize> for Grid<T> {
    fn index_mut(&mut self, x: usize) -> &mut Self::Output {
        let start = x * self.height;
        &mut self.inner[start..start + self.height]
    }
}
