pub mod activity;
pub mod config;
pub mod error;
pub mod io;
pub mod seed;
pub mod store;

pub use activity::Activity;
pub use error::{ErrorKind, Result, RosterError};
pub use store::{Confirmation, RosterStore};
