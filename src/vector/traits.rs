use core::borrow::Borrow;
use core::borrow::BorrowMut;
use core::cmp::Ordering;
use core::fmt;
use core::hash::Hash;
use core::hash::Hasher;
use core::ops::Deref;
use core::ops::DerefMut;
use core::ops::Index;
use core::ops::IndexMut;
use core::slice;
use core::slice::SliceIndex;

use super::IntoIter;
use super::SimpleVector;
use crate::allocator::AltAllocator;
use crate::buffer::ArrayBuf;
use crate::buffer::alloc_failed;
use crate::error::VectorError;

impl<T, A: AltAllocator + Default> Default for SimpleVector<T, A> {
    fn default() -> Self {
        return Self { buf: ArrayBuf::default() };
    }
}

impl<T: Clone, A: AltAllocator + Clone> Clone for SimpleVector<T, A> {
    fn clone(&self) -> Self {
        return Self { buf: self.buf.clone() };
    }
}

impl<T: fmt::Debug, A: AltAllocator> fmt::Debug for SimpleVector<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return fmt::Debug::fmt(self.as_slice(), f);
    }
}

impl<T, A: AltAllocator> Deref for SimpleVector<T, A> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        return self.as_slice();
    }
}

impl<T, A: AltAllocator> DerefMut for SimpleVector<T, A> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        return self.as_mut_slice();
    }
}

impl<T, A: AltAllocator> AsRef<[T]> for SimpleVector<T, A> {
    fn as_ref(&self) -> &[T] {
        return self.as_slice();
    }
}

impl<T, A: AltAllocator> AsMut<[T]> for SimpleVector<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        return self.as_mut_slice();
    }
}

impl<T, A: AltAllocator> Borrow<[T]> for SimpleVector<T, A> {
    fn borrow(&self) -> &[T] {
        return self.as_slice();
    }
}

impl<T, A: AltAllocator> BorrowMut<[T]> for SimpleVector<T, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        return self.as_mut_slice();
    }
}

// Plain `[]` goes through slice indexing and panics when out of range.
// `get_unchecked` is the unchecked path and `at` the error-returning one.
impl<T, I: SliceIndex<[T]>, A: AltAllocator> Index<I> for SimpleVector<T, A> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        return Index::index(self.as_slice(), index);
    }
}

impl<T, I: SliceIndex<[T]>, A: AltAllocator> IndexMut<I> for SimpleVector<T, A> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        return IndexMut::index_mut(self.as_mut_slice(), index);
    }
}

impl<T, U, A, B> PartialEq<SimpleVector<U, B>> for SimpleVector<T, A>
where
    T: PartialEq<U>,
    A: AltAllocator,
    B: AltAllocator,
{
    fn eq(&self, other: &SimpleVector<U, B>) -> bool {
        return self.as_slice() == other.as_slice();
    }
}

impl<T: PartialEq<U>, U, A: AltAllocator> PartialEq<[U]> for SimpleVector<T, A> {
    fn eq(&self, other: &[U]) -> bool {
        return self.as_slice() == other;
    }
}

impl<T: PartialEq<U>, U, A: AltAllocator> PartialEq<&[U]> for SimpleVector<T, A> {
    fn eq(&self, other: &&[U]) -> bool {
        return self.as_slice() == *other;
    }
}

impl<T: PartialEq<U>, U, A: AltAllocator, const N: usize> PartialEq<[U; N]> for SimpleVector<T, A> {
    fn eq(&self, other: &[U; N]) -> bool {
        return self.as_slice() == other.as_slice();
    }
}

impl<T: Eq, A: AltAllocator> Eq for SimpleVector<T, A> {}

/// Lexicographic over the live elements: the first differing pair decides,
/// otherwise the shorter vector is less.
impl<T: PartialOrd, A: AltAllocator> PartialOrd for SimpleVector<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        return self.as_slice().partial_cmp(other.as_slice());
    }
}

impl<T: Ord, A: AltAllocator> Ord for SimpleVector<T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        return self.as_slice().cmp(other.as_slice());
    }
}

impl<T: Hash, A: AltAllocator> Hash for SimpleVector<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(items: [T; N]) -> Self {
        let mut vec = match Self::with_capacity(N) {
            Ok(vec) => vec,
            Err(err) => alloc_failed(err),
        };
        for item in items {
            vec.write_within_capacity(item);
        }
        return vec;
    }
}

impl<T: Clone> TryFrom<&[T]> for SimpleVector<T> {
    type Error = VectorError;

    fn try_from(items: &[T]) -> Result<Self, Self::Error> {
        return Self::from_slice(items);
    }
}

impl<T> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut vec = match Self::with_capacity(iter.size_hint().0) {
            Ok(vec) => vec,
            Err(err) => alloc_failed(err),
        };
        <Self as Extend<T>>::extend(&mut vec, iter);
        return vec;
    }
}

impl<T, A: AltAllocator> Extend<T> for SimpleVector<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            if let Err(err) = self.push(item) {
                alloc_failed(err);
            }
        }
    }
}

impl<'a, T: Copy + 'a, A: AltAllocator> Extend<&'a T> for SimpleVector<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        <Self as Extend<T>>::extend(self, iter.into_iter().copied());
    }
}

impl<'a, T, A: AltAllocator> IntoIterator for &'a SimpleVector<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}

impl<'a, T, A: AltAllocator> IntoIterator for &'a mut SimpleVector<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter_mut();
    }
}

impl<T, A: AltAllocator> IntoIterator for SimpleVector<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> Self::IntoIter {
        return IntoIter::new(self.buf);
    }
}
