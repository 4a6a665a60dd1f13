use thiserror::Error;

/// Результат для операций над записями захвата
pub type CaptureResult<T> = std::result::Result<T, CaptureError>;

/// Типы ошибок формата захвата.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// Буфер короче фиксированного размера записи
    #[error("Truncated input: need {needed} bytes, got {got}")]
    TruncatedInput { needed: usize, got: usize },

    /// Неправильное магическое число (чужой или повреждённый файл)
    #[error("Bad magic in {field}: expected {expected:#010x}, found {found:#010x}")]
    BadMagic {
        field: &'static str,
        expected: u32,
        found: u32,
    },

    /// Нарушение спецификации формата
    #[error("Format violation: {0}")]
    FormatViolation(String),

    /// Ошибки ввода/вывода (автоконвертируются из std::io::Error)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CaptureError {
    /// Удобные конструкторы
    pub fn truncated(
        needed: usize,
        got: usize,
    ) -> Self {
        Self::TruncatedInput { needed, got }
    }

    pub fn format_violation<S: Into<String>>(s: S) -> Self {
        Self::FormatViolation(s.into())
    }
}
