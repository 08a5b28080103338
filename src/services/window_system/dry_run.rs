use std::cell::RefCell;

use tracing::info;

use super::r#trait::WindowSystem;
use crate::config::DryRunConfig;
use crate::error::{Result, SwapError};
use crate::events::{ActiveWindow, MaximizationState, ScreenResolution, WindowId, WmCommand};
use crate::swap_error;

/// Идентификатор, под которым dry-run отдаёт эмулируемое окно
const DRY_RUN_WINDOW: WindowId = 0xd00d;

pub struct DryRunWindowSystem {
    resolution: ScreenResolution,
    window: ActiveWindow,
    state: MaximizationState,
    sent: RefCell<Vec<WmCommand>>,
    fail_at: Option<usize>,
}

impl DryRunWindowSystem {
    pub fn new(config: &DryRunConfig) -> Self {
        info!("Dry-run режим - команды оконному менеджеру не отправляются");

        Self {
            resolution: config.resolution(),
            window: ActiveWindow {
                id: DRY_RUN_WINDOW,
                geometry: config.geometry(),
            },
            state: config.state(),
            sent: RefCell::new(Vec::new()),
            fail_at: None,
        }
    }

    /// Команды, "отправленные" за время работы
    #[cfg(test)]
    pub fn sent_commands(&self) -> Vec<WmCommand> {
        self.sent.borrow().clone()
    }

    /// Отказывать на команде с этим порядковым номером (с 1)
    #[cfg(test)]
    pub fn failing_at(mut self, step: usize) -> Self {
        self.fail_at = Some(step);
        self
    }
}

impl WindowSystem for DryRunWindowSystem {
    fn current_resolution(&self) -> Result<ScreenResolution> {
        Ok(self.resolution)
    }

    fn active_window(&self) -> Result<ActiveWindow> {
        Ok(self.window)
    }

    fn maximization_state(&self, window: WindowId) -> Result<MaximizationState> {
        if window != self.window.id {
            return SwapError::query(format!("неизвестное окно 0x{:08x}", window));
        }
        Ok(self.state)
    }

    fn send_command(&self, window: WindowId, command: &WmCommand) -> Result<()> {
        let step = self.sent.borrow().len() + 1;
        if self.fail_at == Some(step) {
            return Err(swap_error!(protocol, "эмулированный отказ на шаге {}", step));
        }

        info!("[DRY RUN] 0x{:08x}: {}", window, command);
        self.sent.borrow_mut().push(*command);
        Ok(())
    }
}
