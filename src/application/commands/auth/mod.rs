// src/application/commands/auth/mod.rs
mod bootstrap;
mod login;
mod service;
mod session;

pub use login::LoginCommand;
pub use service::AuthService;
