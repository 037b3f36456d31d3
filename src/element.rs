/// Element bound shared by every dispatch entry point.
///
/// `Ord` is the total-order constraint all algorithms compare through;
/// `Clone` backs the copy-producing mode and the allocating algorithms
/// (merge, radix).
///
/// The radix members make the integer-only restriction of radix sort
/// checkable at the dispatch boundary instead of through reflection-style
/// type tests: `RADIX_KEYED` is the type-level capability, `radix_key` the
/// per-value key. Types without a natural non-negative integer key keep the
/// defaults and are rejected by the radix strategy.
pub trait Sortable: Ord + Clone {
    /// Whether values of this type carry an integer radix key.
    const RADIX_KEYED: bool = false;

    /// The non-negative decimal key radix sort buckets by.
    ///
    /// `None` marks a value with no representable key, i.e. a negative
    /// integer.
    fn radix_key(&self) -> Option<u64> {
        None
    }
}

macro_rules! sortable_unsigned {
    ($($t:ty),+) => {
        $(
            impl Sortable for $t {
                const RADIX_KEYED: bool = true;

                fn radix_key(&self) -> Option<u64> {
                    Some(*self as u64)
                }
            }
        )+
    };
}

macro_rules! sortable_signed {
    ($($t:ty),+) => {
        $(
            impl Sortable for $t {
                const RADIX_KEYED: bool = true;

                fn radix_key(&self) -> Option<u64> {
                    (*self >= 0).then(|| *self as u64)
                }
            }
        )+
    };
}

macro_rules! sortable_plain {
    ($($t:ty),+) => {
        $(impl Sortable for $t {})+
    };
}

sortable_unsigned!(u8, u16, u32, u64, usize);
sortable_signed!(i8, i16, i32, i64, isize);

// The 128 bit integers do not fit the u64 digit pipeline.
sortable_plain!(u128, i128, bool, char, String);

impl Sortable for &str {}
