/// Backend декодирования (выбор при создании сессии).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Встроенный симулятор (не требует кодека).
    Simulated,
    /// OpenH264 (требует feature `openh264`).
    OpenH264,
}

/// Тип битстрима, передаваемый кодеку при инициализации.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitstreamKind {
    /// Обычный AVC (H.264) битстрим
    Avc,
    /// Масштабируемое расширение SVC
    Svc,
}

/// Уровень трассировки кодека (значения Wels API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceLevel {
    Quiet,
    Error,
    Warning,
    Info,
    Debug,
    Detail,
}

impl TraceLevel {
    /// Числовое значение опции трассировки для библиотеки.
    pub fn as_i32(&self) -> i32 {
        match self {
            TraceLevel::Quiet => 0,
            TraceLevel::Error => 1,
            TraceLevel::Warning => 2,
            TraceLevel::Info => 4,
            TraceLevel::Debug => 8,
            TraceLevel::Detail => 16,
        }
    }
}

/// Полная конфигурация сессии декодирования.
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Какой backend создавать
    pub backend: BackendKind,
    /// Тип битстрима
    pub bitstream: BitstreamKind,
    /// Режим «только разбор» (без восстановления кадров)
    pub parse_only: bool,
    /// Уровень трассировки библиотеки
    pub trace_level: TraceLevel,
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов
////////////////////////////////////////////////////////////////////////////////

impl std::fmt::Display for BackendKind {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            BackendKind::Simulated => write!(f, "sim"),
            BackendKind::OpenH264 => write!(f, "openh264"),
        }
    }
}

impl std::str::FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sim" | "simulated" => Ok(BackendKind::Simulated),
            "openh264" | "wels" => Ok(BackendKind::OpenH264),
            _ => Err(format!("Unknown backend: '{s}'. Use: sim, openh264")),
        }
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Simulated,
            bitstream: BitstreamKind::Avc,
            parse_only: false,
            trace_level: TraceLevel::Detail,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_kind_fromstr() {
        assert_eq!("sim".parse::<BackendKind>().unwrap(), BackendKind::Simulated);
        assert_eq!(
            "openh264".parse::<BackendKind>().unwrap(),
            BackendKind::OpenH264
        );
        assert_eq!("wels".parse::<BackendKind>().unwrap(), BackendKind::OpenH264);
        assert!("vaapi".parse::<BackendKind>().is_err());
    }

    #[test]
    fn test_trace_level_values() {
        assert_eq!(TraceLevel::Quiet.as_i32(), 0);
        assert_eq!(TraceLevel::Error.as_i32(), 1);
        assert_eq!(TraceLevel::Warning.as_i32(), 2);
        assert_eq!(TraceLevel::Info.as_i32(), 4);
        assert_eq!(TraceLevel::Debug.as_i32(), 8);
        assert_eq!(TraceLevel::Detail.as_i32(), 16);
    }

    #[test]
    fn test_default_config() {
        let cfg = DecoderConfig::default();
        assert_eq!(cfg.backend, BackendKind::Simulated);
        assert_eq!(cfg.bitstream, BitstreamKind::Avc);
        assert!(!cfg.parse_only);
    }
}
