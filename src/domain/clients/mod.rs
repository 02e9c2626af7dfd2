pub mod mutation_client;
pub mod status_client;

pub use mutation_client::MutationClient;
pub use status_client::StatusClient;
