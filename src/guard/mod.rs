//! Import checks: the library-level operation behind `importguard check`.

pub mod check;
pub mod measurement;
pub mod result;

pub use check::check_import;
pub use measurement::MeasurementSet;
pub use result::{CheckOptions, CheckResult};
