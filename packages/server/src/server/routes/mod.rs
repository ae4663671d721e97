// HTTP routes
pub mod discovery;
pub mod health;

pub use discovery::*;
pub use health::*;
