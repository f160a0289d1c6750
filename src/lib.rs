mod constants;
mod factory;
mod types;
mod utils;

pub use crate::constants::{GROWTH_DIVISOR, HEADROOM};
pub use crate::factory::{expected_size_seq, new_seq, presized_seq, seq_from, seq_from_iter};
pub use crate::types::Sequence;
pub use crate::utils::growth_capacity;
