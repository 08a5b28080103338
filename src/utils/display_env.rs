use tracing::{info, warn};

/// Тип графической сессии
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    X11,
    Wayland,
    Unknown,
}

fn detect_session(session_type: Option<&str>, wayland_display: bool) -> SessionKind {
    match session_type {
        Some("x11") => SessionKind::X11,
        Some("wayland") => SessionKind::Wayland,
        _ if wayland_display => SessionKind::Wayland,
        _ => SessionKind::Unknown,
    }
}

/// Проверить окружение перед подключением к дисплею. Только предупреждения:
/// окончательный ответ даёт попытка подключения.
pub fn check_display_environment() -> SessionKind {
    match std::env::var("DISPLAY") {
        Ok(value) if !value.is_empty() => info!("DISPLAY={}", value),
        _ => warn!("Переменная DISPLAY не задана, подключение к X-серверу скорее всего не удастся"),
    }

    let session_type = std::env::var("XDG_SESSION_TYPE").ok();
    let wayland_display = std::env::var_os("WAYLAND_DISPLAY").is_some();
    let session = detect_session(session_type.as_deref(), wayland_display);

    if session == SessionKind::Wayland {
        warn!("⚠️  Сессия Wayland: доступны только окна XWayland");
    }

    session
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_session() {
        assert_eq!(detect_session(Some("x11"), false), SessionKind::X11);
        assert_eq!(detect_session(Some("x11"), true), SessionKind::X11);
        assert_eq!(detect_session(Some("wayland"), false), SessionKind::Wayland);
        assert_eq!(detect_session(None, true), SessionKind::Wayland);
        assert_eq!(detect_session(Some("tty"), false), SessionKind::Unknown);
    }

    #[test]
    fn test_check_reads_environment() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("DISPLAY", ":0");
            jail.set_env("XDG_SESSION_TYPE", "wayland");
            assert_eq!(check_display_environment(), SessionKind::Wayland);

            jail.set_env("DISPLAY", "");
            jail.set_env("XDG_SESSION_TYPE", "x11");
            assert_eq!(check_display_environment(), SessionKind::X11);
            Ok(())
        });
    }
}
