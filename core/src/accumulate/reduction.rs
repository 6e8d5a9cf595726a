//! Constant carriers and the stock reductions.

/// A type standing for a constant of type `T`.
pub trait ConstValue<T> {
    const VALUE: T;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConstUsize<const N: usize>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConstU64<const N: u64>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConstI64<const N: i64>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConstBool<const B: bool>;

impl<const N: usize> ConstValue<usize> for ConstUsize<N> {
    const VALUE: usize = N;
}

impl<const N: u64> ConstValue<u64> for ConstU64<N> {
    const VALUE: u64 = N;
}

impl<const N: i64> ConstValue<i64> for ConstI64<N> {
    const VALUE: i64 = N;
}

impl<const B: bool> ConstValue<bool> for ConstBool<B> {
    const VALUE: bool = B;
}

/// Combines the constants carried by `A` and `B` into `RESULT`.
///
/// `A` is the running accumulator, `B` the new contribution.
pub trait StaticReduction<T, A, B> {
    const RESULT: T;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Plus;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Minus;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Multiply;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Min;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Max;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Or;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct And;

macro_rules! impl_integer_reductions {
    ($($t:ty),+) => {$(
        impl<A: ConstValue<$t>, B: ConstValue<$t>> StaticReduction<$t, A, B> for Plus {
            const RESULT: $t = A::VALUE + B::VALUE;
        }

        impl<A: ConstValue<$t>, B: ConstValue<$t>> StaticReduction<$t, A, B> for Minus {
            const RESULT: $t = A::VALUE - B::VALUE;
        }

        impl<A: ConstValue<$t>, B: ConstValue<$t>> StaticReduction<$t, A, B> for Multiply {
            const RESULT: $t = A::VALUE * B::VALUE;
        }

        impl<A: ConstValue<$t>, B: ConstValue<$t>> StaticReduction<$t, A, B> for Min {
            const RESULT: $t = if A::VALUE < B::VALUE { A::VALUE } else { B::VALUE };
        }

        impl<A: ConstValue<$t>, B: ConstValue<$t>> StaticReduction<$t, A, B> for Max {
            const RESULT: $t = if A::VALUE > B::VALUE { A::VALUE } else { B::VALUE };
        }
    )+};
}

impl_integer_reductions!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<A: ConstValue<bool>, B: ConstValue<bool>> StaticReduction<bool, A, B> for Or {
    const RESULT: bool = A::VALUE || B::VALUE;
}

impl<A: ConstValue<bool>, B: ConstValue<bool>> StaticReduction<bool, A, B> for And {
    const RESULT: bool = A::VALUE && B::VALUE;
}
