//! Storage layer for the players selection manager
//!
//! - `models`: Data structures
//! - `schema`: Connection management and schema initialization
//! - `players`: Player store, including the cascading delete
//! - `scores`: Score store

pub mod models;
pub mod players;
pub mod schema;
pub mod scores;


pub use models::*;
pub use players::PlayerStore;
pub use schema::Database;
pub use scores::ScoreStore;
