//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and receives session state and
//! configuration as props from the app shell.

pub mod profile;
pub mod todos;
