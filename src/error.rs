use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwapError {
    #[error("Не удалось открыть дисплей: {0}")]
    Connection(#[from] x11rb::errors::ConnectError),

    #[error("Ошибка запроса к оконной системе: {0}")]
    Query(String),

    #[error("Ошибка протокола X11: {0}")]
    Protocol(String),

    #[error("Команда {step} из {total} ({command}) не выполнена: {reason}")]
    Command {
        step: usize,
        total: usize,
        command: String,
        reason: String,
    },

    #[error("Размещение невозможно: {0}")]
    Placement(String),
}

impl SwapError {
    pub fn query<T>(msg: impl Into<String>) -> Result<T> {
        Err(SwapError::Query(msg.into()))
    }
}

pub type Result<T> = std::result::Result<T, SwapError>;

// Удобный макрос для создания ошибок запроса
#[macro_export]
macro_rules! swap_error {
    (query, $($arg:tt)*) => {
        $crate::error::SwapError::Query(format!($($arg)*))
    };
    (protocol, $($arg:tt)*) => {
        $crate::error::SwapError::Protocol(format!($($arg)*))
    };
    (placement, $($arg:tt)*) => {
        $crate::error::SwapError::Placement(format!($($arg)*))
    };
}
