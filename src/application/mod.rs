pub mod commands;
pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;

mod lookup;

pub use error::ApplicationResult;
