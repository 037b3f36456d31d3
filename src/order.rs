/// Comparison direction shared by every algorithm.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// True when `a` must end up strictly before `b` under this order.
    ///
    /// This is the single predicate all order handling routes through.
    /// Stable algorithms keep equal elements in input order by testing
    /// `!is_before(b, a)` for "b may stay behind a" instead of comparing a
    /// second time with flipped operands.
    #[inline]
    pub fn is_before<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            SortOrder::Ascending => a < b,
            SortOrder::Descending => a > b,
        }
    }
}
