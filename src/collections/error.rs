/// Hard failures reported by container operations.
///
/// Routine conditions such as popping an empty stack are not errors; those
/// operations return [`None`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ContainerError {
    /// An absent element was offered to an inserting operation.
    #[error("element to insert must be present")]
    InvalidArgument,
    /// A list position does not address a valid slot.
    #[error("position {pos} is out of range for length {len}")]
    PositionOutOfRange { pos: usize, len: usize },
}
