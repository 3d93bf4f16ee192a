pub mod app_bus;
pub mod auth;
pub mod command_handlers;
pub mod config;
pub mod cqrs;
pub mod queries_handlers;
pub mod realtime;
pub mod repository;
pub mod uow;

pub mod test_utils;
