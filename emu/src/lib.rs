pub mod error;
pub mod model;

pub use error::RuntimeError;
pub use model::State;
