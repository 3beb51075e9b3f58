//! Session credentials: the bearer token model and the synchronized cell holding it.

pub mod secret;
pub mod session;

pub use secret::*;
pub use session::*;
