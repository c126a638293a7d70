/// Command-line interface and session simulation
pub mod cli;
/// Grid constants and runtime configuration
pub mod configuration;
/// PNG rendering of the lattice for debugging
pub mod debug_image;
/// Error types and status mapping
pub mod error;
/// Progress display for simulated sessions
pub mod progress;
