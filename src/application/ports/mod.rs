// src/application/ports/mod.rs
pub mod media;
pub mod preferences;
pub mod security;
pub mod session_revocation;
pub mod share;
pub mod time;
