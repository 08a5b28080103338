use std::fmt::Display;

use tracing::{debug, info};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{
    Atom, AtomEnum, ClientMessageEvent, ConnectionExt as _, EventMask, GetPropertyReply, Window,
};
use x11rb::rust_connection::RustConnection;

use super::property::{decode_active_window, decode_maximization};
use super::r#trait::WindowSystem;
use crate::error::{Result, SwapError};
use crate::events::{
    ActiveWindow, MaximizationState, ScreenResolution, WindowGeometry, WindowId, WmCommand,
};
use crate::swap_error;

x11rb::atom_manager! {
    pub Atoms: AtomsCookie {
        _NET_ACTIVE_WINDOW,
        _NET_WM_STATE,
        _NET_WM_STATE_MAXIMIZED_VERT,
        _NET_WM_STATE_MAXIMIZED_HORZ,
        _NET_MOVERESIZE_WINDOW,
    }
}

// Флаги data.l[0] у _NET_MOVERESIZE_WINDOW, гравитация 0 (по умолчанию)
const MOVERESIZE_X: u32 = 1 << 8;
const MOVERESIZE_Y: u32 = 1 << 9;
const MOVERESIZE_WIDTH: u32 = 1 << 10;
const MOVERESIZE_HEIGHT: u32 = 1 << 11;

/// Максимальная длина запрашиваемого свойства в 32-битных словах
const PROPERTY_LENGTH: u32 = 1024;

fn query_failed(what: &str, e: impl Display) -> SwapError {
    swap_error!(query, "{}: {}", what, e)
}

/// Тип сообщения и пять 32-битных полей клиентского сообщения для команды
pub fn encode_client_message(atoms: &Atoms, command: &WmCommand) -> (Atom, [u32; 5]) {
    match *command {
        WmCommand::ChangeState { action, vertical, horizontal } => {
            let vert = if vertical { atoms._NET_WM_STATE_MAXIMIZED_VERT } else { x11rb::NONE };
            let horz = if horizontal { atoms._NET_WM_STATE_MAXIMIZED_HORZ } else { x11rb::NONE };
            (atoms._NET_WM_STATE, [action.value(), vert, horz, 0, 0])
        }
        WmCommand::MoveResize { geometry, explicit_height } => {
            let mut flags = MOVERESIZE_X | MOVERESIZE_Y | MOVERESIZE_WIDTH;
            if explicit_height {
                flags |= MOVERESIZE_HEIGHT;
            }
            (
                atoms._NET_MOVERESIZE_WINDOW,
                [
                    flags,
                    geometry.x as u32,
                    geometry.y as u32,
                    geometry.width,
                    geometry.height,
                ],
            )
        }
    }
}

/// Соединение с X-сервером, которым владеет один запуск
pub struct X11WindowSystem {
    conn: RustConnection,
    root: Window,
    atoms: Atoms,
}

impl X11WindowSystem {
    pub fn connect() -> Result<Self> {
        info!("Подключение к X-серверу");

        let (conn, screen_num) = x11rb::connect(None)?;

        let root = conn
            .setup()
            .roots
            .get(screen_num)
            .map(|screen| screen.root)
            .ok_or_else(|| swap_error!(query, "экран {} не найден", screen_num))?;

        let atoms = Atoms::new(&conn)
            .map_err(|e| query_failed("не удалось запросить атомы EWMH", e))?
            .reply()
            .map_err(|e| query_failed("не удалось получить атомы EWMH", e))?;

        debug!("Подключено к экрану {}, корневое окно 0x{:08x}", screen_num, root);

        Ok(Self { conn, root, atoms })
    }

    fn get_property(&self, window: Window, property: Atom, type_: AtomEnum) -> Result<GetPropertyReply> {
        self.conn
            .get_property(false, window, property, type_, 0, PROPERTY_LENGTH)
            .map_err(|e| query_failed("не удалось запросить свойство", e))?
            .reply()
            .map_err(|e| query_failed("не удалось прочитать свойство", e))
    }

    fn window_geometry(&self, window: Window) -> Result<WindowGeometry> {
        let geometry = self
            .conn
            .get_geometry(window)
            .map_err(|e| query_failed("не удалось запросить геометрию окна", e))?
            .reply()
            .map_err(|e| query_failed("не удалось получить геометрию окна", e))?;

        // Начало окна в координатах корневого окна
        let origin = self
            .conn
            .translate_coordinates(window, self.root, 0, 0)
            .map_err(|e| query_failed("не удалось запросить перевод координат", e))?
            .reply()
            .map_err(|e| query_failed("не удалось перевести координаты", e))?;

        Ok(WindowGeometry::new(
            i32::from(origin.dst_x),
            i32::from(origin.dst_y),
            u32::from(geometry.width),
            u32::from(geometry.height),
        ))
    }
}

impl WindowSystem for X11WindowSystem {
    fn current_resolution(&self) -> Result<ScreenResolution> {
        let root = self
            .conn
            .get_geometry(self.root)
            .map_err(|e| query_failed("не удалось запросить размер корневого окна", e))?
            .reply()
            .map_err(|e| query_failed("не удалось получить размер корневого окна", e))?;

        Ok(ScreenResolution::new(u32::from(root.width), u32::from(root.height)))
    }

    fn active_window(&self) -> Result<ActiveWindow> {
        let property = self.get_property(self.root, self.atoms._NET_ACTIVE_WINDOW, AtomEnum::WINDOW)?;
        let id = decode_active_window(&property)?;
        let geometry = self.window_geometry(id)?;

        Ok(ActiveWindow { id, geometry })
    }

    fn maximization_state(&self, window: WindowId) -> Result<MaximizationState> {
        let property = self.get_property(window, self.atoms._NET_WM_STATE, AtomEnum::ATOM)?;
        decode_maximization(
            &property,
            self.atoms._NET_WM_STATE_MAXIMIZED_VERT,
            self.atoms._NET_WM_STATE_MAXIMIZED_HORZ,
        )
    }

    fn send_command(&self, window: WindowId, command: &WmCommand) -> Result<()> {
        let (message_type, data) = encode_client_message(&self.atoms, command);
        debug!("ClientMessage 0x{:08x}: type {} data {:?}", window, message_type, data);

        let event = ClientMessageEvent::new(32, window, message_type, data);

        self.conn
            .send_event(
                false,
                self.root,
                EventMask::SUBSTRUCTURE_REDIRECT | EventMask::SUBSTRUCTURE_NOTIFY,
                event,
            )
            .map_err(|e| swap_error!(protocol, "не удалось отправить событие: {}", e))?
            .check()
            .map_err(|e| swap_error!(protocol, "X-сервер отклонил событие: {}", e))?;

        Ok(())
    }
}

impl Drop for X11WindowSystem {
    fn drop(&mut self) {
        info!("Закрытие соединения с X-сервером");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::StateAction;

    fn atoms() -> Atoms {
        Atoms {
            _NET_ACTIVE_WINDOW: 400,
            _NET_WM_STATE: 401,
            _NET_WM_STATE_MAXIMIZED_VERT: 402,
            _NET_WM_STATE_MAXIMIZED_HORZ: 403,
            _NET_MOVERESIZE_WINDOW: 404,
        }
    }

    #[test]
    fn test_remove_state_encodes_only_set_axes() {
        let command = WmCommand::ChangeState {
            action: StateAction::Remove,
            vertical: true,
            horizontal: false,
        };
        assert_eq!(encode_client_message(&atoms(), &command), (401, [0, 402, 0, 0, 0]));
    }

    #[test]
    fn test_add_vertical_state() {
        let command = WmCommand::ChangeState {
            action: StateAction::Add,
            vertical: true,
            horizontal: false,
        };
        assert_eq!(encode_client_message(&atoms(), &command), (401, [1, 402, 0, 0, 0]));
    }

    #[test]
    fn test_moveresize_flags() {
        let geometry = WindowGeometry::new(960, 0, 952, 600);
        let keep_height = WmCommand::MoveResize { geometry, explicit_height: false };
        assert_eq!(
            encode_client_message(&atoms(), &keep_height),
            (404, [0x700, 960, 0, 952, 600])
        );

        let set_height = WmCommand::MoveResize {
            geometry: WindowGeometry::new(0, 0, 952, 540),
            explicit_height: true,
        };
        assert_eq!(
            encode_client_message(&atoms(), &set_height),
            (404, [0xf00, 0, 0, 952, 540])
        );
    }
}
