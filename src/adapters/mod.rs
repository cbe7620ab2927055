//! Range adapters: counted cursors and uniform cursor/boundary pairs.

mod common;
mod counted;

pub use common::{common_range, Common};
pub use counted::{counted, Counted, CountedEnd};
