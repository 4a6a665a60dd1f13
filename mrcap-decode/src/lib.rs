//! Сессии декодирования видео поверх внешнего кодека.
//!
//! Кодек — непрозрачный внешний компонент: сюда входят только создание
//! и инициализация экземпляра, проброс сжатых байт и явное всплытие кода
//! состояния библиотеки. Вместо скрытого процесс-глобального экземпляра
//! каждый вызывающий владеет собственной [`DecoderSession`] с
//! гарантированным освобождением ресурсов при выходе из области видимости.

pub mod backend;
pub mod config;
pub mod error;
pub mod metrics;
pub mod session;

#[cfg(feature = "openh264")]
pub mod wels;

pub use backend::*;
pub use config::*;
pub use error::*;
pub use metrics::*;
pub use session::*;
