mod dog;
mod session;

pub use dog::{Dog, NewDog};
pub use session::{TrainingSession, UNKNOWN_SCENT};
