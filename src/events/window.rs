use serde::{Deserialize, Serialize};
use std::fmt;

/// Идентификатор окна X11
pub type WindowId = u32;

/// Размер общего виртуального экрана (оба монитора)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenResolution {
    pub width: u32,
    pub height: u32,
}

impl ScreenResolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Левый край правой половины. При нечётной ширине посередине остаётся щель в 1 пиксель.
    pub fn half_width(&self) -> u32 {
        self.width / 2
    }
}

impl fmt::Display for ScreenResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Геометрия окна в координатах корневого окна
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl WindowGeometry {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Горизонтальная середина окна (`x + width / 2`, целочисленно)
    pub fn mid_x(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width / 2)
    }
}

impl fmt::Display for WindowGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} @ ({},{})", self.width, self.height, self.x, self.y)
    }
}

/// Флаги развёрнутости окна, по осям независимо
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaximizationState {
    pub vertical: bool,
    pub horizontal: bool,
}

impl fmt::Display for MaximizationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.vertical, self.horizontal) {
            (true, true) => write!(f, "развёрнуто полностью"),
            (true, false) => write!(f, "развёрнуто по вертикали"),
            (false, true) => write!(f, "развёрнуто по горизонтали"),
            (false, false) => write!(f, "не развёрнуто"),
        }
    }
}

/// Активное окно и его геометрия
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveWindow {
    pub id: WindowId,
    pub geometry: WindowGeometry,
}

impl fmt::Display for ActiveWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x} {}", self.id, self.geometry)
    }
}

/// Полное состояние, прочитанное за один запуск
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSnapshot {
    pub window: ActiveWindow,
    pub resolution: ScreenResolution,
    pub state: MaximizationState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mid_x_uses_integer_half() {
        let geometry = WindowGeometry::new(100, 50, 801, 600);
        assert_eq!(geometry.mid_x(), 500);

        let negative = WindowGeometry::new(-300, 0, 200, 100);
        assert_eq!(negative.mid_x(), -200);
    }

    #[test]
    fn test_odd_width_half_is_floored() {
        assert_eq!(ScreenResolution::new(1921, 1080).half_width(), 960);
    }

    #[test]
    fn test_display_formats() {
        let window = ActiveWindow {
            id: 0x3a0000b,
            geometry: WindowGeometry::new(0, 0, 952, 540),
        };
        assert_eq!(window.to_string(), "0x03a0000b 952x540 @ (0,0)");
        assert_eq!(ScreenResolution::new(3840, 1080).to_string(), "3840x1080");
        assert_eq!(MaximizationState::default().to_string(), "не развёрнуто");
    }
}
