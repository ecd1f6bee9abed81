//! Train/test splitting and class-balance correction.

mod smote;
mod split;

pub use smote::{oversample_minority, InsufficientMinorityError};
pub use split::{select_columns, split_indices};
