use quickcheck::{Arbitrary, Gen};

mod tree;

/// Keys drawn from a deliberately small range so inserts regularly collide
/// with keys already in the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SmallKey(u8);

impl Arbitrary for SmallKey {
    fn arbitrary(g: &mut Gen) -> Self {
        SmallKey(u8::arbitrary(g) % 8)
    }
}
