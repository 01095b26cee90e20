pub mod classify;
pub mod replay;
pub mod types;
