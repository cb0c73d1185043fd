pub mod authoring;
pub mod commands;
pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;
pub mod sharing;
pub mod theme;

pub use error::ApplicationResult;
