use thiserror::Error;

pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

#[derive(Debug, Error)]
pub enum DecodeError {
    /// Запрошенный backend не собран или не найден
    #[error("Decoder backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Библиотека кодека вернула ненулевой код состояния
    #[error("Codec failure (status {status}): {detail}")]
    Codec { status: i64, detail: String },

    /// Некорректный вход (пустой буфер и т.п.)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Ошибка создания или конфигурации сессии
    #[error("Session error: {0}")]
    Session(String),
}
