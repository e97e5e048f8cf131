use num::PrimInt;
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// Integer types that can be grouped.
///
/// Centers are kept as [`f64`], so every primitive provides its own conversion. For the 64 and 128 bit
/// types this rounds to the nearest representable value once magnitudes exceed 2^53.
pub trait Primitive: PrimInt + Hash + Debug + Display + Default + Send + Sync + 'static {
    fn to_center(self) -> f64;
}

macro_rules! impl_primitive {
    ($($t:ty),*) => {
        $(
            impl Primitive for $t {
                #[inline(always)]
                fn to_center(self) -> f64 { self as f64 }
            }
        )*
    };
}
impl_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
