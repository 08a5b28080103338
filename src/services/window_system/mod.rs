//! WindowSystem: граница с оконной системой
//!
//! Этот модуль отвечает ТОЛЬКО за запросы состояния (активное окно, геометрия,
//! разрешение, флаги развёрнутости) и отправку готовых команд. Решения о
//! размещении здесь не принимаются, это делает PlacementPlanner.

mod dry_run;
mod property;
mod r#trait;
mod x11;

#[cfg(test)]
pub use self::dry_run::DryRunWindowSystem;
pub use self::r#trait::{create_window_system, WindowSystem};
