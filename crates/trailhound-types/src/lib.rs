pub mod condition;
pub mod domain;
mod util;

pub use condition::ConditionKey;
pub use domain::*;
pub use util::lenient_f64;
