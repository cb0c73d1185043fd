pub mod database;
pub mod media;
pub mod repositories;
pub mod security;
pub mod seed;
pub mod time;
pub mod wiring;
