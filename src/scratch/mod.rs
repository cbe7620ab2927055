//! Scratch storage for buffered merges
//!
//! A [`ScratchBuffer`] is acquired once per top-level call and lent out as a
//! [`StagingVec`] to each merge step that fits into it.

mod buffer;
mod staging;

pub use buffer::ScratchBuffer;
pub use staging::StagingVec;
