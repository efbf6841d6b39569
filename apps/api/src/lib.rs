pub mod assets;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod quiz;
pub mod routes;
pub mod state;
