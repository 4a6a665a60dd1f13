//! Спецификация бинарного формата файлов захвата
//!
//! Все записи имеют фиксированный размер и фиксированные смещения полей.
//! Все многобайтовые числа хранятся в порядке little-endian (нативная
//! раскладка исходных структур). Декодеры — чистые функции над входным
//! буфером: исходные байты никогда не изменяются, за конец буфера чтение
//! не выходит.

use mrcap_types::{
    error::{CaptureError, CaptureResult},
    CmdHeader, CursorProperty, SampleFileHeader, SampleHeader, VideoProperty,
};

use crate::binary::{
    read_array_at, read_i32_at, read_i64_at, read_u16_at, read_u32_at, write_array_at,
    write_i32_at, write_i64_at, write_u16_at, write_u32_at,
};

/// Магическая константа начала заголовка файла
pub const SAMPLE_FILE_MAGIC_HEADER: u32 = 0x2C05_F158;

/// Магическая константа-пара
pub const SAMPLE_FILE_MAGIC_TRAILER: u32 = 0x84AD_52E2;

/// Размер заголовка файла (96 байт)
pub const SAMPLE_FILE_HEADER_SIZE: usize = 96;

/// Размер командной записи (64 байта)
pub const CMD_HEADER_SIZE: usize = 64;

/// Размер заголовка медиа-выборки (48 байт)
pub const SAMPLE_HEADER_SIZE: usize = 48;

/// Размер блока свойств видео (24 байта)
pub const VIDEO_PROPERTY_SIZE: usize = 24;

/// Размер блока свойств курсора (24 байта)
pub const CURSOR_PROPERTY_SIZE: usize = 24;

/// Смещение начала данных; во всех известных файлах равно 1024
pub const DATA_START_OFFSET: u32 = 1024;

/// Декодирование/кодирование заголовка файла захвата.
pub trait SampleFileHeaderExt: Sized {
    /// Шаблон валидного заголовка: магические константы на месте,
    /// данные начинаются с [`DATA_START_OFFSET`].
    fn new(version_info: u32) -> Self;

    /// Декодирует заголовок из буфера размером не меньше 96 байт.
    ///
    /// Магические константы проверяются до чтения остальных полей:
    /// несовпадение означает чужой или повреждённый файл.
    fn decode(buf: &[u8]) -> CaptureResult<Self>;

    /// Сериализует заголовок в 96 байт (обратная операция к `decode`).
    fn encode(&self) -> [u8; SAMPLE_FILE_HEADER_SIZE];

    /// Номер версии формата, выведенный из `version_info`.
    ///
    /// -1 означает нераспознанное значение.
    fn version_number(&self) -> i32;

    /// Файлы версии 2 и выше содержат несколько кодеков.
    fn is_multi_codec(&self) -> bool;
}

/// Декодирование/кодирование командной записи.
pub trait CmdHeaderExt: Sized {
    fn decode(buf: &[u8]) -> CaptureResult<Self>;
    fn encode(&self) -> [u8; CMD_HEADER_SIZE];
}

/// Декодирование/кодирование заголовка медиа-выборки.
pub trait SampleHeaderExt: Sized {
    fn decode(buf: &[u8]) -> CaptureResult<Self>;
    fn encode(&self) -> [u8; SAMPLE_HEADER_SIZE];
}

/// Декодирование/кодирование блока свойств видео.
pub trait VideoPropertyExt: Sized {
    fn decode(buf: &[u8]) -> CaptureResult<Self>;
    fn encode(&self) -> [u8; VIDEO_PROPERTY_SIZE];
}

/// Декодирование/кодирование блока свойств курсора.
pub trait CursorPropertyExt: Sized {
    fn decode(buf: &[u8]) -> CaptureResult<Self>;
    fn encode(&self) -> [u8; CURSOR_PROPERTY_SIZE];
}

impl SampleFileHeaderExt for SampleFileHeader {
    fn new(version_info: u32) -> Self {
        SampleFileHeader {
            header: SAMPLE_FILE_MAGIC_HEADER,
            trailer: SAMPLE_FILE_MAGIC_TRAILER,
            unknown: [0u8; 24],
            version_info,
            file_offset: DATA_START_OFFSET,
            unused: [0u8; 56],
        }
    }

    fn decode(buf: &[u8]) -> CaptureResult<Self> {
        if buf.len() < SAMPLE_FILE_HEADER_SIZE {
            return Err(CaptureError::truncated(SAMPLE_FILE_HEADER_SIZE, buf.len()));
        }

        let mut off = 0;

        let header = read_u32_at(buf, &mut off);
        let trailer = read_u32_at(buf, &mut off);

        // Магические константы проверяются до чтения остальных полей
        if header != SAMPLE_FILE_MAGIC_HEADER {
            return Err(CaptureError::BadMagic {
                field: "header",
                expected: SAMPLE_FILE_MAGIC_HEADER,
                found: header,
            });
        }

        if trailer != SAMPLE_FILE_MAGIC_TRAILER {
            return Err(CaptureError::BadMagic {
                field: "trailer",
                expected: SAMPLE_FILE_MAGIC_TRAILER,
                found: trailer,
            });
        }

        let unknown = read_array_at::<24>(buf, &mut off);
        let version_info = read_u32_at(buf, &mut off);
        let file_offset = read_u32_at(buf, &mut off);
        let unused = read_array_at::<56>(buf, &mut off);

        Ok(SampleFileHeader {
            header,
            trailer,
            unknown,
            version_info,
            file_offset,
            unused,
        })
    }

    fn encode(&self) -> [u8; SAMPLE_FILE_HEADER_SIZE] {
        let mut buf = [0u8; SAMPLE_FILE_HEADER_SIZE];
        let mut off = 0;

        write_u32_at(&mut buf, &mut off, self.header);
        write_u32_at(&mut buf, &mut off, self.trailer);
        write_array_at(&mut buf, &mut off, &self.unknown);
        write_u32_at(&mut buf, &mut off, self.version_info);
        write_u32_at(&mut buf, &mut off, self.file_offset);
        write_array_at(&mut buf, &mut off, &self.unused);

        buf
    }

    fn version_number(&self) -> i32 {
        // Пороговая лестница, снятая с известных файлов разных версий
        if self.version_info >> 16 >= 0xE {
            return -1;
        }
        if self.version_info <= 0x4E20 {
            return 0;
        }
        if self.version_info <= 0x589D {
            return 1;
        }
        if self.version_info <= 0xB5F8 {
            return 2;
        }
        if self.version_info <= 0xBBC7 {
            return 3;
        }
        if self.version_info <= 0xC601 {
            return 4;
        }
        5
    }

    fn is_multi_codec(&self) -> bool {
        self.version_number() > 1
    }
}

impl CmdHeaderExt for CmdHeader {
    fn decode(buf: &[u8]) -> CaptureResult<Self> {
        if buf.len() < CMD_HEADER_SIZE {
            return Err(CaptureError::truncated(CMD_HEADER_SIZE, buf.len()));
        }

        let mut off = 0;

        let size_to_read = read_u32_at(buf, &mut off);
        let kind = read_i32_at(buf, &mut off);
        let unknown_1 = read_array_at::<8>(buf, &mut off);
        let name_ident = read_i32_at(buf, &mut off);
        let padding_1 = read_array_at::<4>(buf, &mut off);
        let timing_a = read_u32_at(buf, &mut off);
        let unknown_2 = read_array_at::<22>(buf, &mut off);
        let some_type = read_u16_at(buf, &mut off);
        let padding_2 = read_array_at::<4>(buf, &mut off);
        let additional_size = read_i32_at(buf, &mut off);
        let padding_3 = read_array_at::<4>(buf, &mut off);

        Ok(CmdHeader {
            size_to_read,
            kind,
            unknown_1,
            name_ident,
            padding_1,
            timing_a,
            unknown_2,
            some_type,
            padding_2,
            additional_size,
            padding_3,
        })
    }

    fn encode(&self) -> [u8; CMD_HEADER_SIZE] {
        let mut buf = [0u8; CMD_HEADER_SIZE];
        let mut off = 0;

        write_u32_at(&mut buf, &mut off, self.size_to_read);
        write_i32_at(&mut buf, &mut off, self.kind);
        write_array_at(&mut buf, &mut off, &self.unknown_1);
        write_i32_at(&mut buf, &mut off, self.name_ident);
        write_array_at(&mut buf, &mut off, &self.padding_1);
        write_u32_at(&mut buf, &mut off, self.timing_a);
        write_array_at(&mut buf, &mut off, &self.unknown_2);
        write_u16_at(&mut buf, &mut off, self.some_type);
        write_array_at(&mut buf, &mut off, &self.padding_2);
        write_i32_at(&mut buf, &mut off, self.additional_size);
        write_array_at(&mut buf, &mut off, &self.padding_3);

        buf
    }
}

impl SampleHeaderExt for SampleHeader {
    fn decode(buf: &[u8]) -> CaptureResult<Self> {
        if buf.len() < SAMPLE_HEADER_SIZE {
            return Err(CaptureError::truncated(SAMPLE_HEADER_SIZE, buf.len()));
        }

        let mut off = 0;

        let media_type = read_i32_at(buf, &mut off);
        let reserved_1 = read_array_at::<4>(buf, &mut off);
        let timing_a = read_i64_at(buf, &mut off);
        let timing_b = read_i64_at(buf, &mut off);
        let reserved_2 = read_array_at::<8>(buf, &mut off);
        let data_size = read_i32_at(buf, &mut off);
        let property_size = read_i32_at(buf, &mut off);
        let reserved_3 = read_array_at::<8>(buf, &mut off);

        Ok(SampleHeader {
            media_type,
            reserved_1,
            timing_a,
            timing_b,
            reserved_2,
            data_size,
            property_size,
            reserved_3,
        })
    }

    fn encode(&self) -> [u8; SAMPLE_HEADER_SIZE] {
        let mut buf = [0u8; SAMPLE_HEADER_SIZE];
        let mut off = 0;

        write_i32_at(&mut buf, &mut off, self.media_type);
        write_array_at(&mut buf, &mut off, &self.reserved_1);
        write_i64_at(&mut buf, &mut off, self.timing_a);
        write_i64_at(&mut buf, &mut off, self.timing_b);
        write_array_at(&mut buf, &mut off, &self.reserved_2);
        write_i32_at(&mut buf, &mut off, self.data_size);
        write_i32_at(&mut buf, &mut off, self.property_size);
        write_array_at(&mut buf, &mut off, &self.reserved_3);

        buf
    }
}

impl VideoPropertyExt for VideoProperty {
    fn decode(buf: &[u8]) -> CaptureResult<Self> {
        if buf.len() < VIDEO_PROPERTY_SIZE {
            return Err(CaptureError::truncated(VIDEO_PROPERTY_SIZE, buf.len()));
        }

        let mut off = 0;

        let name_ident = read_i32_at(buf, &mut off);
        let reserved_1 = read_array_at::<4>(buf, &mut off);
        let width = read_i32_at(buf, &mut off);
        let height = read_i32_at(buf, &mut off);
        let reserved_2 = read_array_at::<8>(buf, &mut off);

        Ok(VideoProperty {
            name_ident,
            reserved_1,
            width,
            height,
            reserved_2,
        })
    }

    fn encode(&self) -> [u8; VIDEO_PROPERTY_SIZE] {
        let mut buf = [0u8; VIDEO_PROPERTY_SIZE];
        let mut off = 0;

        write_i32_at(&mut buf, &mut off, self.name_ident);
        write_array_at(&mut buf, &mut off, &self.reserved_1);
        write_i32_at(&mut buf, &mut off, self.width);
        write_i32_at(&mut buf, &mut off, self.height);
        write_array_at(&mut buf, &mut off, &self.reserved_2);

        buf
    }
}

impl CursorPropertyExt for CursorProperty {
    fn decode(buf: &[u8]) -> CaptureResult<Self> {
        if buf.len() < CURSOR_PROPERTY_SIZE {
            return Err(CaptureError::truncated(CURSOR_PROPERTY_SIZE, buf.len()));
        }

        let mut off = 0;

        let x = read_i32_at(buf, &mut off);
        let y = read_i32_at(buf, &mut off);
        let width = read_i32_at(buf, &mut off);
        let height = read_i32_at(buf, &mut off);
        let name_ident = read_i32_at(buf, &mut off);
        let kind = read_i32_at(buf, &mut off);

        Ok(CursorProperty {
            x,
            y,
            width,
            height,
            name_ident,
            kind,
        })
    }

    fn encode(&self) -> [u8; CURSOR_PROPERTY_SIZE] {
        let mut buf = [0u8; CURSOR_PROPERTY_SIZE];
        let mut off = 0;

        write_i32_at(&mut buf, &mut off, self.x);
        write_i32_at(&mut buf, &mut off, self.y);
        write_i32_at(&mut buf, &mut off, self.width);
        write_i32_at(&mut buf, &mut off, self.height);
        write_i32_at(&mut buf, &mut off, self.name_ident);
        write_i32_at(&mut buf, &mut off, self.kind);

        buf
    }
}
