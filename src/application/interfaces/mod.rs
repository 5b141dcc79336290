/// Read-only category operations
pub mod explorer;
/// Project management operations
pub mod management;
