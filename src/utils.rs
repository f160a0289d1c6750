use super::constants::{GROWTH_DIVISOR, HEADROOM};

// Never less than `count`; saturates instead of panicking near usize::MAX.
pub fn growth_capacity(count: usize) -> usize {
    count
        .saturating_add(count / GROWTH_DIVISOR)
        .saturating_add(HEADROOM)
}
