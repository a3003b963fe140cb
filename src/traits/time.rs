//! Submodule defining the time capability, including the zero-sized `NoTime`
//! used as the time type of static edges.

use core::fmt::Debug;
use core::ops::{Add, Sub};

/// Blanket trait for values usable as a time coordinate: integer ticks or
/// real-valued seconds, anything totally ordered and supporting
/// subtraction.
pub trait Time: Copy + Ord + Add<Output = Self> + Sub<Output = Self> + Debug {
    /// The additive identity / "no time has passed" value.
    fn zero() -> Self;
}

macro_rules! impl_time_for_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl Time for $t {
                fn zero() -> Self { 0 }
            }
        )*
    };
}

impl_time_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// `f32`/`f64` deliberately don't implement `Time`: they have no total
// order (`Ord`) in the standard library because of NaN, and `Time`'s
// supertrait bound relies on a genuine total order for sorting adjacency
// indices. Real-valued time coordinates should scale to an integer tick
// count instead.

/// The time type of a static edge: a zero-sized value where every instance
/// compares equal and `+`/`-` are no-ops. This lets [`crate::network::Network`]
/// share one implementation across static and temporal edges, since cause
/// order degenerates to the canonicalized-vertex order when there is no
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct NoTime;

impl Add for NoTime {
    type Output = NoTime;

    fn add(self, _rhs: NoTime) -> NoTime {
        NoTime
    }
}

impl Sub for NoTime {
    type Output = NoTime;

    fn sub(self, _rhs: NoTime) -> NoTime {
        NoTime
    }
}

impl Time for NoTime {
    fn zero() -> Self {
        NoTime
    }
}
