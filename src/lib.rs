/*
 * Plexus Particle Field - Module Definitions
 *
 * This file defines the module structure for the particle field application.
 * It organizes the code into logical components for better maintainability.
 */

// Re-export key components for easier access
pub use app::Model;
pub use assets::Textures;
pub use debug::DebugInfo;
pub use params::SimulationParams;
pub use particle::Particle;

// Define modules
pub mod app;
pub mod assets;
pub mod debug;
pub mod field;
pub mod input;
pub mod params;
pub mod particle;
pub mod renderer;
pub mod screen;
pub mod spawner;
