//! Commands change club data, queries read it. Both carry the caller's
//! `ClubContext` and are dispatched by the [`AppBus`](crate::app_bus::AppBus).

mod command;
mod query;

pub mod commands;
pub mod queries;

pub use command::*;
pub use query::*;
