pub mod ai;
pub mod controller;
pub mod network;
pub mod tui;

pub use controller::PlayerController;
pub use network::RemoteAI;
pub use tui::TuiController;
