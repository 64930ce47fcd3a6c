pub mod entities;
pub mod error;
