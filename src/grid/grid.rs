/// Rectangular two-colour bitmap: `false` is white, `true` is black.
///
/// Cells live in one row-major buffer; every row has exactly `width` cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    height: usize,
    width: usize,
}

impl Grid {
    /// Create an all-white `size x size` grid
    ///
    /// # Panics
    /// If `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be at least 1");
        Self {
            cells: vec![false; size * size],
            height: size,
            width: size,
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// (height, width)
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Whether a signed coordinate addresses a cell of this grid
    #[inline]
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({}, {}) outside {}x{} grid",
            row,
            col,
            self.height,
            self.width
        );
        row * self.width + col
    }

    /// Colour of the cell at `(row, col)`
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.offset(row, col)]
    }

    /// Invert the colour of the cell at `(row, col)`
    #[inline]
    pub fn flip(&mut self, row: usize, col: usize) {
        let idx = self.offset(row, col);
        self.cells[idx] = !self.cells[idx];
    }

    /// Rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Number of black cells
    pub fn black_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Add a white row above; every existing row index shifts by one
    pub fn prepend_row(&mut self) {
        let mut cells = Vec::with_capacity(self.cells.len() + self.width);
        cells.resize(self.width, false);
        cells.extend_from_slice(&self.cells);
        self.cells = cells;
        self.height += 1;
    }

    /// Add a white row below
    pub fn append_row(&mut self) {
        self.cells.resize(self.cells.len() + self.width, false);
        self.height += 1;
    }

    /// Add a white column on the left; every existing column index shifts by one
    pub fn prepend_column(&mut self) {
        self.rebuild_with_column(true);
    }

    /// Add a white column on the right
    pub fn append_column(&mut self) {
        self.rebuild_with_column(false);
    }

    fn rebuild_with_column(&mut self, leading: bool) {
        let width = self.width + 1;
        let mut cells = Vec::with_capacity(self.height * width);
        for row in self.cells.chunks_exact(self.width) {
            if leading {
                cells.push(false);
            }
            cells.extend_from_slice(row);
            if !leading {
                cells.push(false);
            }
        }
        self.cells = cells;
        self.width = width;
    }
}
