use tracing::info;

use crate::error::Result;
use crate::events::WindowSnapshot;
use crate::services::WindowSystem;

/// Прочитать всё состояние, нужное планировщику. Любая ошибка фатальна:
/// без полного состояния безопасного частичного действия нет.
pub fn read_window_state(window_system: &dyn WindowSystem) -> Result<WindowSnapshot> {
    let window = window_system.active_window()?;
    info!("Активное окно: {}", window);

    let resolution = window_system.current_resolution()?;
    info!("Разрешение: {}", resolution);

    let state = window_system.maximization_state(window.id)?;
    info!("Состояние окна: {}", state);

    Ok(WindowSnapshot {
        window,
        resolution,
        state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::events::{MaximizationState, ScreenResolution, WindowGeometry};
    use crate::services::window_system::DryRunWindowSystem;

    #[test]
    fn test_snapshot_collects_all_queries() {
        let mut config = Config::default();
        config.dry_run.maximized_vertical = true;
        config.dry_run.screen_width = 3840;

        let ws = DryRunWindowSystem::new(&config.dry_run);
        let snapshot = read_window_state(&ws).unwrap();

        assert_eq!(snapshot.resolution, ScreenResolution::new(3840, 1080));
        assert_eq!(snapshot.window.geometry, WindowGeometry::new(100, 50, 800, 600));
        assert_eq!(
            snapshot.state,
            MaximizationState { vertical: true, horizontal: false }
        );
    }
}
