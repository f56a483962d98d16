mod arena;
mod handle;
mod node;
mod raw_bst;

pub(crate) use raw_bst::{InOrder, RawBst};
