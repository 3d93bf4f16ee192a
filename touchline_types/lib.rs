pub mod common;
pub mod errors;
pub mod events;
pub mod posts;
pub mod roles;

pub use errors::Result;
