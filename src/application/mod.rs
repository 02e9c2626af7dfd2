pub mod coordinator;
pub mod dto;
pub mod event_bus;
#[cfg(test)]
pub mod testing;
pub mod use_case_container;
pub mod use_cases;

pub use coordinator::InstallerCoordinator;
pub use event_bus::{CoordinatorEvent, EventBus};
pub use use_case_container::UseCaseContainer;
