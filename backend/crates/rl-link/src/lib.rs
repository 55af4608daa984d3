pub mod account_linker;
pub mod error;

pub use account_linker::AccountLinker;
pub use error::{LinkError, Result};
