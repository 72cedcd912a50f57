mod iter;
mod simple_vector;
mod traits;

pub use iter::IntoIter;
pub use simple_vector::SimpleVector;

/// Builds a [`SimpleVector`] from a list of values, like `vec!`.
///
/// ```
/// use simple_vector::simple_vec;
///
/// let v = simple_vec![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
/// assert_eq!(v.capacity(), 3);
/// ```
///
/// # Panics
/// If the allocator refuses the block.
#[macro_export]
macro_rules! simple_vec {
    () => {
        $crate::SimpleVector::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($item),+])
    };
}
