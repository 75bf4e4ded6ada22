pub mod jwt;
pub mod scoreboard;
pub mod settings;
