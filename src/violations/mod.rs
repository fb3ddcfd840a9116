//! Policy evaluation: time budgets and banned imports.

pub mod engine;
pub mod schema;

pub use engine::{evaluate, find_banned_imports, Evaluation};
pub use schema::{Violation, ViolationKind};
