//! Библиотека основного формата файлов захвата
//!
//! Эталонная реализация декодирования и кодирования заголовков файлов
//! записи конференций: заголовок файла, командные записи, записи
//! медиа-выборок и их свойства.
//!
//! # Быстрый старт
//!
//! ```
//! use mrcap_core::{SampleFileHeaderExt, SAMPLE_FILE_HEADER_SIZE};
//! use mrcap_types::SampleFileHeader;
//!
//! # fn main() -> Result<(), mrcap_types::CaptureError> {
//! // 96 байт из начала файла захвата
//! let mut buf = [0u8; SAMPLE_FILE_HEADER_SIZE];
//! buf[0..4].copy_from_slice(&0x2C05F158u32.to_le_bytes());
//! buf[4..8].copy_from_slice(&0x84AD52E2u32.to_le_bytes());
//! buf[36..40].copy_from_slice(&1024u32.to_le_bytes());
//!
//! let header = SampleFileHeader::decode(&buf)?;
//! assert_eq!(header.file_offset, 1024);
//! # Ok(())
//! # }
//! ```

pub mod binary;
pub mod format;
pub mod serialization;

pub use binary::*;
pub use format::*;
pub use serialization::*;

/// Версия библиотеки.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
