pub mod errors;
pub mod paths;

pub use errors::*;
pub use paths::*;
