pub const NO_CAPACITY: usize = 0;

// Capacity heuristic: 10% growth headroom plus a few spare slots.
pub const GROWTH_DIVISOR: usize = 10;
pub const HEADROOM: usize = 5;
