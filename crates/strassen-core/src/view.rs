//! Zero-copy rectangular windows over a [`Matrix`].
//!
//! A view stores a borrowed backing buffer plus a row/column offset and an
//! extent. Sub-views compose offsets with their parent, so the quadrants of a
//! quadrant still address the original buffer directly. Views never allocate.
//!
//! Extents of a sub-view are taken as given and are not clamped to the
//! parent. Debug builds assert that every access stays inside the view;
//! release builds only keep the bounds check of the backing `Vec`.

use crate::matrix::{Matrix, Scalar};

/// The four half-order windows of an even-order view.
#[derive(Debug, Clone, Copy)]
pub struct Quadrants<V> {
    pub top_left: V,
    pub top_right: V,
    pub bottom_left: V,
    pub bottom_right: V,
}

/// Read-only window into a matrix buffer.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, T> {
    buffer: &'a Matrix<T>,
    row_offset: usize,
    col_offset: usize,
    rows: usize,
    cols: usize,
}

impl<'a, T: Scalar> MatrixView<'a, T> {
    /// Window of `rows x cols` elements starting at `(row_offset, col_offset)`.
    #[must_use]
    pub fn new(
        buffer: &'a Matrix<T>,
        row_offset: usize,
        col_offset: usize,
        rows: usize,
        cols: usize,
    ) -> Self {
        debug_assert!(row_offset + rows <= buffer.rows());
        debug_assert!(col_offset + cols <= buffer.cols());
        Self {
            buffer,
            row_offset,
            col_offset,
            rows,
            cols,
        }
    }

    /// Window spanning the whole buffer.
    #[must_use]
    pub fn full(buffer: &'a Matrix<T>) -> Self {
        Self::new(buffer, 0, 0, buffer.rows(), buffer.cols())
    }

    /// Sub-window relative to this view. Offsets compose; extents are not clamped.
    #[must_use]
    pub fn window(&self, row_offset: usize, col_offset: usize, rows: usize, cols: usize) -> Self {
        Self::new(
            self.buffer,
            self.row_offset + row_offset,
            self.col_offset + col_offset,
            rows,
            cols,
        )
    }

    /// Split into four `rows/2 x cols/2` windows.
    #[must_use]
    pub fn quadrants(&self) -> Quadrants<Self> {
        let half_rows = self.rows / 2;
        let half_cols = self.cols / 2;
        Quadrants {
            top_left: self.window(0, 0, half_rows, half_cols),
            top_right: self.window(0, half_cols, half_rows, half_cols),
            bottom_left: self.window(half_rows, 0, half_rows, half_cols),
            bottom_right: self.window(half_rows, half_cols, half_rows, half_cols),
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(row < self.rows && col < self.cols);
        self.buffer.get(self.row_offset + row, self.col_offset + col)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    #[must_use]
    pub fn col_offset(&self) -> usize {
        self.col_offset
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Copy the window into a freshly allocated matrix.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix<T> {
        let mut out = Matrix::zeros(self.rows, self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.set(row, col, self.get(row, col));
            }
        }
        out
    }
}

/// Writable window into a matrix buffer.
///
/// Sub-windows reborrow the parent, so at most one writable window into a
/// buffer is live at a time.
#[derive(Debug)]
pub struct MatrixViewMut<'a, T> {
    buffer: &'a mut Matrix<T>,
    row_offset: usize,
    col_offset: usize,
    rows: usize,
    cols: usize,
}

impl<'a, T: Scalar> MatrixViewMut<'a, T> {
    #[must_use]
    pub fn new(
        buffer: &'a mut Matrix<T>,
        row_offset: usize,
        col_offset: usize,
        rows: usize,
        cols: usize,
    ) -> Self {
        debug_assert!(row_offset + rows <= buffer.rows());
        debug_assert!(col_offset + cols <= buffer.cols());
        Self {
            buffer,
            row_offset,
            col_offset,
            rows,
            cols,
        }
    }

    #[must_use]
    pub fn full(buffer: &'a mut Matrix<T>) -> Self {
        let (rows, cols) = (buffer.rows(), buffer.cols());
        Self::new(buffer, 0, 0, rows, cols)
    }

    /// Writable sub-window relative to this view.
    pub fn window_mut(
        &mut self,
        row_offset: usize,
        col_offset: usize,
        rows: usize,
        cols: usize,
    ) -> MatrixViewMut<'_, T> {
        MatrixViewMut::new(
            &mut *self.buffer,
            self.row_offset + row_offset,
            self.col_offset + col_offset,
            rows,
            cols,
        )
    }

    /// Read-only view of the same window.
    #[must_use]
    pub fn as_view(&self) -> MatrixView<'_, T> {
        MatrixView::new(
            &*self.buffer,
            self.row_offset,
            self.col_offset,
            self.rows,
            self.cols,
        )
    }

    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(row < self.rows && col < self.cols);
        self.buffer.get(self.row_offset + row, self.col_offset + col)
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(row < self.rows && col < self.cols);
        self.buffer
            .set(self.row_offset + row, self.col_offset + col, value);
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix<i64> {
        Matrix::from_vec(4, 4, (0..16).collect()).unwrap()
    }

    #[test]
    fn full_view_reads_buffer() {
        let m = sample();
        let v = m.view();
        assert_eq!(v.rows(), 4);
        assert_eq!(v.cols(), 4);
        assert_eq!(v.get(2, 3), 11);
    }

    #[test]
    fn window_translates_offsets() {
        let m = sample();
        let v = MatrixView::new(&m, 1, 2, 2, 2);
        assert_eq!(v.get(0, 0), 6);
        assert_eq!(v.get(1, 1), 11);
    }

    #[test]
    fn nested_windows_compose_offsets() {
        let m = sample();
        let outer = m.view().window(1, 1, 3, 3);
        let inner = outer.window(1, 1, 2, 2);
        assert_eq!(inner.row_offset(), 2);
        assert_eq!(inner.col_offset(), 2);
        assert_eq!(inner.get(0, 0), 10);
        assert_eq!(inner.get(1, 1), 15);
    }

    #[test]
    fn quadrants_cover_matrix() {
        let m = sample();
        let q = m.view().quadrants();
        assert_eq!(q.top_left.get(0, 0), 0);
        assert_eq!(q.top_right.get(0, 0), 2);
        assert_eq!(q.bottom_left.get(0, 0), 8);
        assert_eq!(q.bottom_right.get(1, 1), 15);

        // Quadrant of a quadrant still addresses the original buffer
        let inner = q.bottom_right.quadrants();
        assert_eq!(inner.top_right.get(0, 0), 11);
    }

    #[test]
    fn to_matrix_copies_window() {
        let m = sample();
        let copy = m.view().quadrants().top_right.to_matrix();
        assert_eq!(copy.to_rows(), vec![vec![2, 3], vec![6, 7]]);
    }

    #[test]
    fn mutable_window_writes_through() {
        let mut m: Matrix<i64> = Matrix::zeros(4, 4);
        {
            let mut full = m.view_mut();
            let mut br = full.window_mut(2, 2, 2, 2);
            br.set(1, 0, 9);
            let mut nested = br.window_mut(0, 1, 1, 1);
            nested.set(0, 0, 5);
            assert_eq!(nested.as_view().get(0, 0), 5);
        }
        assert_eq!(m.get(3, 2), 9);
        assert_eq!(m.get(2, 3), 5);
    }
}
