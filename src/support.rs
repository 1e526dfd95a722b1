//! Supporting utilities used by the equation-of-state models.

pub mod root;
pub mod units;
