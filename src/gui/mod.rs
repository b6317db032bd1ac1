// GUI module organization and public exports

// Main application state and UI logic
mod app;
// Reusable UI components (stat cards, status colours)
mod components;

// Export AppState for use in main.rs
pub use app::AppState;
// Export all component functions (stat_card, status_color)
pub use components::*;
