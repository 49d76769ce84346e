//! Display helpers for the `table` output format.

pub mod balance;
pub mod format;

pub use balance::render_balance;
pub use format::{format_amount, format_expiry, format_price, format_rate, group_thousands};
