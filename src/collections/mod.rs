pub mod error;
pub mod traits;

#[cfg(feature = "list")]
pub mod list;
#[cfg(feature = "queue")]
pub mod queue;
#[cfg(feature = "stack")]
pub mod stack;

pub use error::ContainerError;
pub use traits::{Collection, ListLike, QueueLike, StackLike};

#[cfg(feature = "list")]
pub use list::SequenceList;
#[cfg(feature = "queue")]
pub use queue::CircularQueue;
#[cfg(feature = "stack")]
pub use stack::LinkedStack;
