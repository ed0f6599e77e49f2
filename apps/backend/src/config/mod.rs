//! Startup configuration read from the environment.

pub mod game;
pub mod server;

pub use game::GameConfig;
pub use server::ServerConfig;
