pub mod changeset;

pub use changeset::{merge, CategoryValue, ChangeEntry, ChangeSet, RECOGNIZED_CATEGORIES};
