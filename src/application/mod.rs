//! Application layer: the two request flows, each ending in an `Envelope`.

pub mod balance_flow;
pub mod token_flow;

#[cfg(test)]
mod test_support;

pub use balance_flow::BalanceFlow;
pub use token_flow::TokenFlow;
