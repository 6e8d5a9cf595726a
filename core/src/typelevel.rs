//! Type-level naturals and booleans.
//!
//! Compile-time child indices and static degrees are Peano naturals so that
//! the engines can recurse over them with ordinary trait resolution:
//!
//! ```
//! use typetree_core::typelevel::{Idx, Nat, S, Z, idx};
//!
//! assert_eq!(<S<S<Z>> as Nat>::VALUE, 2);
//! assert_eq!(<Idx<5> as Nat>::VALUE, 5);
//! let _third: S<S<Z>> = idx::<2>();
//! ```

use core::fmt::Debug;
use core::marker::PhantomData;

/// A natural number encoded as a type.
pub trait Nat: Copy + Default + Debug + 'static {
    const VALUE: usize;
}

/// Zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Z;

/// Successor of `N`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct S<N>(PhantomData<N>);

impl Nat for Z {
    const VALUE: usize = 0;
}

impl<N: Nat> Nat for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

pub type U0 = Z;
pub type U1 = S<U0>;
pub type U2 = S<U1>;
pub type U3 = S<U2>;
pub type U4 = S<U3>;
pub type U5 = S<U4>;
pub type U6 = S<U5>;
pub type U7 = S<U6>;
pub type U8 = S<U7>;
pub type U9 = S<U8>;
pub type U10 = S<U9>;
pub type U11 = S<U10>;
pub type U12 = S<U11>;
pub type U13 = S<U12>;
pub type U14 = S<U13>;
pub type U15 = S<U14>;
pub type U16 = S<U15>;

// ============================================================================
// Const generics to Peano
// ============================================================================

/// Carrier for a const-generic `usize`, used to look up its Peano form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Const<const N: usize>;

/// Maps `Const<N>` to the Peano natural with the same value.
///
/// Implemented for `0..=32`, which bounds the degree of static power nodes
/// that can be unrolled at compile time.
pub trait ToNat {
    type Output: Nat;
}

macro_rules! nat_table {
    ($prev:ty; ) => {};
    ($prev:ty; $n:literal $(, $rest:literal)*) => {
        impl ToNat for Const<$n> {
            type Output = S<$prev>;
        }
        impl CanUnroll for Const<$n> {
            type Output = True;
        }
        nat_table!(S<$prev>; $($rest),*);
    };
}

impl ToNat for Const<0> {
    type Output = Z;
}

impl CanUnroll for Const<0> {
    type Output = True;
}

/// Whether `Const<N>` has a Peano form, i.e. whether a static node of degree
/// `N` can be unrolled.
///
/// Answers [`True`] for `0..=32` and [`False`] for `33..=256`. Static power
/// nodes in the second range are always traversed with a runtime loop.
pub trait CanUnroll {
    type Output: Bool;
}

macro_rules! loop_only {
    ($($n:literal),*) => {
        $(
            impl CanUnroll for Const<$n> {
                type Output = False;
            }
        )*
    };
}

loop_only!(
    33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48,
    49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64,
    65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 79, 80,
    81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 96,
    97, 98, 99, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112,
    113, 114, 115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127, 128,
    129, 130, 131, 132, 133, 134, 135, 136, 137, 138, 139, 140, 141, 142, 143, 144,
    145, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157, 158, 159, 160,
    161, 162, 163, 164, 165, 166, 167, 168, 169, 170, 171, 172, 173, 174, 175, 176,
    177, 178, 179, 180, 181, 182, 183, 184, 185, 186, 187, 188, 189, 190, 191, 192,
    193, 194, 195, 196, 197, 198, 199, 200, 201, 202, 203, 204, 205, 206, 207, 208,
    209, 210, 211, 212, 213, 214, 215, 216, 217, 218, 219, 220, 221, 222, 223, 224,
    225, 226, 227, 228, 229, 230, 231, 232, 233, 234, 235, 236, 237, 238, 239, 240,
    241, 242, 243, 244, 245, 246, 247, 248, 249, 250, 251, 252, 253, 254, 255, 256
);

nat_table!(Z; 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32);

/// Peano natural for the literal `N`.
pub type Idx<const N: usize> = <Const<N> as ToNat>::Output;

/// Compile-time child index, e.g. `node.child(idx::<1>())`.
pub fn idx<const N: usize>() -> Idx<N>
where
    Const<N>: ToNat,
{
    Default::default()
}

/// Type-level addition.
pub trait NatAdd<Rhs> {
    type Output: Nat;
}

impl<Rhs: Nat> NatAdd<Rhs> for Z {
    type Output = Rhs;
}

impl<N, Rhs> NatAdd<Rhs> for S<N>
where
    N: Nat + NatAdd<Rhs>,
{
    type Output = S<<N as NatAdd<Rhs>>::Output>;
}

// ============================================================================
// Booleans
// ============================================================================

/// A boolean encoded as a type.
pub trait Bool: Copy + Default + Debug + 'static {
    const VALUE: bool;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct True;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;
}

impl Bool for False {
    const VALUE: bool = false;
}
