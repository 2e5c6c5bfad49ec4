//! Equality strategies for the differencers
//!
//! A strategy must be pure, reflexive and symmetric; the differencers rely on
//! it to decide which elements survive unchanged.

/// Decides whether two elements are treated as unchanged
pub trait Equality<T: ?Sized> {
    fn equal(&self, a: &T, b: &T) -> bool;
}

/// Plain `==`
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<T: PartialEq + ?Sized> Equality<T> for Identity {
    fn equal(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Lines compare equal when they match after removing every space byte
///
/// Only `' '` is ignored; tabs and other whitespace remain significant.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreSpaces;

impl IgnoreSpaces {
    fn significant(line: &[u8]) -> impl Iterator<Item = &u8> {
        line.iter().filter(|&&b| b != b' ')
    }
}

impl Equality<[u8]> for IgnoreSpaces {
    fn equal(&self, a: &[u8], b: &[u8]) -> bool {
        a == b || Self::significant(a).eq(Self::significant(b))
    }
}

impl<'a> Equality<&'a [u8]> for IgnoreSpaces {
    fn equal(&self, a: &&'a [u8], b: &&'a [u8]) -> bool {
        <Self as Equality<[u8]>>::equal(self, a, b)
    }
}

impl<T: ?Sized, F> Equality<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equal(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
