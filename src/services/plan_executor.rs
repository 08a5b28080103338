use tracing::{debug, error, info};

use crate::error::{Result, SwapError};
use crate::events::WindowId;
use crate::services::placement_planner::PlacementPlan;
use crate::services::WindowSystem;

/// Отправить команды плана по порядку. Первая неудачная команда прерывает
/// выполнение и сообщается с номером шага, чтобы промежуточное состояние окна
/// (например, уже без развёрнутости, но не перемещённое) не осталось незамеченным.
pub fn execute_plan(
    window_system: &dyn WindowSystem,
    window: WindowId,
    plan: &PlacementPlan,
) -> Result<()> {
    let commands = plan.commands();
    let total = commands.len();

    for (index, command) in commands.iter().enumerate() {
        let step = index + 1;
        debug!("Шаг {}/{}: {}", step, total, command);

        if let Err(e) = window_system.send_command(window, command) {
            error!("Команда {} ({}) не выполнена: {}", step, command.name(), e);
            return Err(SwapError::Command {
                step,
                total,
                command: command.name().to_string(),
                reason: e.to_string(),
            });
        }
    }

    info!("Перемещение: {}", plan.target);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::events::{StateAction, WmCommand};
    use crate::services::placement_planner::PlacementPlanner;
    use crate::services::window_system::DryRunWindowSystem;
    use crate::services::read_window_state;

    #[test]
    fn test_full_cycle_sends_commands_in_order() {
        let config = Config::default();
        let ws = DryRunWindowSystem::new(&config.dry_run);

        let snapshot = read_window_state(&ws).unwrap();
        let plan = PlacementPlanner::new(config.placement).plan_snapshot(&snapshot).unwrap();
        execute_plan(&ws, snapshot.window.id, &plan).unwrap();

        let sent = ws.sent_commands();
        assert_eq!(sent.len(), 3);
        assert!(matches!(
            sent[0],
            WmCommand::ChangeState { action: StateAction::Remove, vertical: false, horizontal: false }
        ));
        assert!(matches!(sent[1], WmCommand::MoveResize { .. }));
        assert!(matches!(
            sent[2],
            WmCommand::ChangeState { action: StateAction::Add, vertical: true, horizontal: false }
        ));
    }

    #[test]
    fn test_failure_reports_step_and_stops() {
        let config = Config::default();
        let ws = DryRunWindowSystem::new(&config.dry_run).failing_at(2);

        let snapshot = read_window_state(&ws).unwrap();
        let plan = PlacementPlanner::new(config.placement).plan_snapshot(&snapshot).unwrap();
        let err = execute_plan(&ws, snapshot.window.id, &plan).unwrap_err();

        match err {
            SwapError::Command { step, total, .. } => {
                assert_eq!(step, 2);
                assert_eq!(total, 3);
            }
            other => panic!("неожиданная ошибка: {:?}", other),
        }
        // Снятие развёрнутости успело уйти, перемещение и развёртывание нет
        assert_eq!(ws.sent_commands().len(), 1);
    }
}
