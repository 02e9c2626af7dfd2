pub mod client;
pub mod command;

pub use client::HelperClient;
pub use command::HelperCommand;
