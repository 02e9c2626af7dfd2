pub mod clients;
pub mod entities;
pub mod error;
