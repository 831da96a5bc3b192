//! Property tests exercising the public surface of the tree.

mod linked;

use quickcheck::{Arbitrary, Gen};

/// The "things" a quicktest can do to a tree.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Add the item
    Add(T),
    /// Remove one copy of the item
    Remove(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Add(T::arbitrary(g))
        } else {
            Op::Remove(T::arbitrary(g))
        }
    }
}
