/// Dimension queries shared by all matrix types.
pub trait ShapedMatrix {
    /// number of rows
    fn nrows(&self) -> usize;
    /// number of columns
    fn ncols(&self) -> usize;
    /// matrix dimensions as `(rows, cols)`
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    /// true if `self.nrows() == self.ncols()`
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

/// True if `a` and `b` have exactly the same dimensions.
pub fn same_size<A, B>(a: &A, b: &B) -> bool
where
    A: ShapedMatrix + ?Sized,
    B: ShapedMatrix + ?Sized,
{
    a.size() == b.size()
}
