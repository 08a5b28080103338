use std::fmt;

use super::window::WindowGeometry;

/// Действие над `_NET_WM_STATE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateAction {
    Remove,
    Add,
}

impl StateAction {
    /// Значение `data.l[0]` по EWMH
    pub fn value(self) -> u32 {
        match self {
            StateAction::Remove => 0,
            StateAction::Add => 1,
        }
    }
}

/// Запрос оконному менеджеру, отправляемый через корневое окно
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WmCommand {
    ChangeState {
        action: StateAction,
        vertical: bool,
        horizontal: bool,
    },
    MoveResize {
        geometry: WindowGeometry,
        explicit_height: bool,
    },
}

impl WmCommand {
    pub fn name(&self) -> &'static str {
        match self {
            WmCommand::ChangeState { action: StateAction::Remove, .. } => "снятие развёрнутости",
            WmCommand::ChangeState { action: StateAction::Add, .. } => "развёртывание",
            WmCommand::MoveResize { .. } => "перемещение",
        }
    }
}

impl fmt::Display for WmCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WmCommand::ChangeState { action, vertical, horizontal } => write!(
                f,
                "_NET_WM_STATE {:?} (vert: {}, horz: {})",
                action, vertical, horizontal
            ),
            WmCommand::MoveResize { geometry, explicit_height } => write!(
                f,
                "_NET_MOVERESIZE_WINDOW {} (высота: {})",
                geometry,
                if *explicit_height { "задаётся" } else { "сохраняется" }
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_action_values() {
        assert_eq!(StateAction::Remove.value(), 0);
        assert_eq!(StateAction::Add.value(), 1);
    }

    #[test]
    fn test_command_display() {
        let command = WmCommand::MoveResize {
            geometry: WindowGeometry::new(960, 0, 952, 600),
            explicit_height: false,
        };
        assert_eq!(command.name(), "перемещение");
        assert!(command.to_string().contains("952x600 @ (960,0)"));
    }
}
