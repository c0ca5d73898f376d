//! Business logic layer.
//!
//! This module contains the core logic for the application: the intake
//! controller (filtering and de-duplication), the drop-zone drag state, and
//! the registry of revocable preview references. Called by the `commands`
//! layer, which stays free of business logic.

pub mod drag;
pub mod intake;
pub mod preview;

#[cfg(test)]
mod tests {
    #[test]
    fn module_loads() {
        // Verify the services module can be loaded successfully.
    }
}
