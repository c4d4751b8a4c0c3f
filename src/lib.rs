pub mod models;
pub mod progress;
pub mod schedule;
pub mod state;
pub mod storage;
