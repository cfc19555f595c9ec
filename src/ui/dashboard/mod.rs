//! Dashboard screen: state, update pipeline, and rendering

pub mod components;
pub mod renderer;
pub mod state;
pub mod table;
pub mod updaters;
pub mod utils;

pub use renderer::render_dashboard;
pub use state::DashboardState;
