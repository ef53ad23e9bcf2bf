//! Configuration sections for the components that need them.

pub mod logging;
pub mod server;
pub mod storage;

pub use logging::*;
pub use server::*;
pub use storage::*;
