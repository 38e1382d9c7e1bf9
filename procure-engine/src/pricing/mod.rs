//! Pricing engine
//!
//! Pure computation of derived prices and totals:
//!
//! - **item_calculator**: effective price of a single line
//! - **order_calculator**: order totals and position upkeep
//!
//! Derived fields are recomputed eagerly after every input change and
//! never read from possibly-stale inputs at read time.
//!
//! Uses rust_decimal for precision calculations.

pub mod item_calculator;
pub mod order_calculator;

pub use item_calculator::{line_total, recompute_final_price, to_decimal, to_f64};
pub use order_calculator::{order_total, recalculate_totals, renumber};
