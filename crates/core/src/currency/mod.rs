//! Display-only currency conversion.
//!
//! Balances are stored and settled in the base currency exclusively. The
//! conversion rate from the commission configuration is applied at the very
//! edge, when an amount is rendered for a user; nothing here ever feeds back
//! into balance arithmetic.

pub mod display;

pub use display::{display_amount, format_display, format_money};
