mod array;
mod inner;

pub use array::ArrayBuf;
pub(crate) use array::alloc_failed;
