//! PlacementPlanner: чистая логика выбора половины экрана
//!
//! Никакого ввода-вывода: на входе разрешение, геометрия и флаги развёрнутости,
//! на выходе план. Отправкой команд занимается PlanExecutor.

use smallvec::{smallvec, SmallVec};
use tracing::info;

use crate::config::PlacementConfig;
use crate::error::Result;
use crate::events::{
    MaximizationState, ScreenResolution, StateAction, WindowGeometry, WindowSnapshot, WmCommand,
};
use crate::swap_error;

/// Последовательность команд одного плана (не больше трёх)
pub type CommandSequence = SmallVec<[WmCommand; 3]>;

/// Целевая геометрия и переходы состояния, нужные чтобы её достичь
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementPlan {
    pub target: WindowGeometry,
    pub clear_vertical: bool,
    pub clear_horizontal: bool,
    pub set_vertical: bool,
    /// Высота задаётся явно вместо переключения вертикальной развёрнутости
    pub explicit_height: bool,
}

impl PlacementPlan {
    /// Упорядоченные команды: снять развёрнутость, переместить, при необходимости
    /// развернуть по вертикали. Горизонтальная развёрнутость не восстанавливается никогда.
    pub fn commands(&self) -> CommandSequence {
        let mut commands: CommandSequence = smallvec![
            WmCommand::ChangeState {
                action: StateAction::Remove,
                vertical: self.clear_vertical,
                horizontal: self.clear_horizontal,
            },
            WmCommand::MoveResize {
                geometry: self.target,
                explicit_height: self.explicit_height,
            },
        ];

        if self.set_vertical {
            commands.push(WmCommand::ChangeState {
                action: StateAction::Add,
                vertical: true,
                horizontal: false,
            });
        }

        commands
    }
}

pub struct PlacementPlanner {
    config: PlacementConfig,
}

impl PlacementPlanner {
    pub fn new(config: PlacementConfig) -> Self {
        Self { config }
    }

    pub fn plan_snapshot(&self, snapshot: &WindowSnapshot) -> Result<PlacementPlan> {
        self.plan(snapshot.resolution, snapshot.window.geometry, snapshot.state)
    }

    pub fn plan(
        &self,
        resolution: ScreenResolution,
        geometry: WindowGeometry,
        state: MaximizationState,
    ) -> Result<PlacementPlan> {
        let half = resolution.half_width();

        // Отступ не меньше половины экрана дал бы окно нулевой ширины
        if self.config.decoration_padding >= half {
            return Err(swap_error!(
                placement,
                "decoration_padding ({}) должен быть меньше половины ширины экрана {} ({})",
                self.config.decoration_padding,
                resolution,
                half
            ));
        }

        // Окно уезжает на ту половину, где сейчас нет его середины
        let target_x = if geometry.mid_x() > i64::from(half) { 0 } else { half };
        info!(
            "Середина окна {} относительно {}: целевая половина {}",
            geometry.mid_x(),
            half,
            if target_x == 0 { "левая" } else { "правая" }
        );

        let target_width = half - self.config.decoration_padding;

        // Некоторые приложения (emacs) после развёртывания по вертикали подгоняют высоту
        // под целое число строк и сами снимают флаг. Почти полноэкранному окну вместо
        // этого задаём половину высоты экрана явно.
        let almost_full_height = u64::from(geometry.height) + u64::from(self.config.height_tolerance)
            > u64::from(resolution.height);

        let (target_height, explicit_height, set_vertical) = if !state.vertical && almost_full_height {
            info!("Задаём высоту явно: {}", resolution.height / 2);
            (resolution.height / 2, true, false)
        } else {
            info!("Переключаем вертикальную развёрнутость: {}", !state.vertical);
            (geometry.height, false, !state.vertical)
        };

        // target_x не больше half, а half помещается в i32 для любого реального экрана
        let target_x = i32::try_from(target_x).unwrap_or(i32::MAX);

        Ok(PlacementPlan {
            target: WindowGeometry::new(target_x, 0, target_width, target_height),
            clear_vertical: state.vertical,
            clear_horizontal: state.horizontal,
            set_vertical,
            explicit_height,
        })
    }
}

impl Default for PlacementPlanner {
    fn default() -> Self {
        Self::new(PlacementConfig::default())
    }
}
