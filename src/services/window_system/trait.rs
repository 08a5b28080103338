use crate::config::Config;
use crate::error::Result;
use crate::events::{ActiveWindow, MaximizationState, ScreenResolution, WindowId, WmCommand};

/// Trait for window system backends (real X11 or dry-run emulation)
pub trait WindowSystem {
    /// Size of the combined virtual screen
    fn current_resolution(&self) -> Result<ScreenResolution>;

    /// Active window and its geometry in root window coordinates
    fn active_window(&self) -> Result<ActiveWindow>;

    /// Decode `_NET_WM_STATE` of the window into independent axis flags
    fn maximization_state(&self, window: WindowId) -> Result<MaximizationState>;

    /// Send one state-change request addressed to the root window
    fn send_command(&self, window: WindowId, command: &WmCommand) -> Result<()>;
}

/// Factory function to create an appropriate window system based on the dry_run flag
pub fn create_window_system(config: &Config, dry_run: bool) -> Result<Box<dyn WindowSystem>> {
    if dry_run {
        Ok(Box::new(super::dry_run::DryRunWindowSystem::new(&config.dry_run)))
    } else {
        Ok(Box::new(super::x11::X11WindowSystem::connect()?))
    }
}
