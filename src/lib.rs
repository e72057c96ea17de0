#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "collections")]
pub mod check;
