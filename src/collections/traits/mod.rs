pub mod collection;
pub mod list;
pub mod queue;
pub mod stack;

pub use collection::Collection;
pub use list::ListLike;
pub use queue::QueueLike;
pub use stack::StackLike;
