pub mod client_message;
pub mod window;

pub use client_message::{StateAction, WmCommand};
pub use window::{
    ActiveWindow, MaximizationState, ScreenResolution, WindowGeometry, WindowId, WindowSnapshot,
};
