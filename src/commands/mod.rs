// Tauri command modules
// The interface the webview frontend calls into.

pub mod attempt;
pub mod focus;
pub mod store;
pub mod summary;

pub use attempt::*;
pub use focus::*;
pub use store::*;
pub use summary::*;
