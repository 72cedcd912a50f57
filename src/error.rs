use thiserror::Error;

/// Everything that can go wrong during an `ArrayBuf` or `SimpleVector` operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// A checked access or a positional edit named an index past the live range.
    #[error("index {index} is out of range for size {size}")]
    OutOfRange { index: usize, size: usize },
    /// The allocator refused a block. The buffer kept its previous allocation.
    #[error("An allocation failure occurred.")]
    AllocFailure,
    /// Capacity arithmetic overflowed `usize`.
    #[error("usize overflowed while computing the capacity.")]
    CapacityOverflow,
    /// The block would be larger than `isize::MAX` bytes.
    #[error("Failed to create layout.")]
    LayoutFailure,
    /// A buffer was requested with more live elements than slots.
    #[error("length {len} exceeds capacity {capacity}")]
    LengthExceedsCapacity { len: usize, capacity: usize },
}

/// A type alias for `Result<T, VectorError>`
pub type VectorResult<T> = Result<T, VectorError>;
