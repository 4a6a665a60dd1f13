//! Чтение и запись одиночных записей в потоках ввода/вывода.
//!
//! Тонкая обёртка над буферными декодерами из [`crate::format`]: каждая
//! функция читает (или пишет) ровно один фиксированный блок байт. Никакой
//! итерации по записям здесь нет — интерпретация содержимого файла за
//! пределами заголовков остаётся за вызывающим.

use std::io::{Read, Write};

use mrcap_types::{
    error::CaptureResult,
    CmdHeader, SampleFileHeader, SampleHeader,
};

use crate::format::{
    CmdHeaderExt, SampleFileHeaderExt, SampleHeaderExt, CMD_HEADER_SIZE, SAMPLE_FILE_HEADER_SIZE,
    SAMPLE_HEADER_SIZE,
};

/// Читает и валидирует заголовок файла из начала потока.
pub fn read_sample_file_header<R: Read>(reader: &mut R) -> CaptureResult<SampleFileHeader> {
    let mut buf = [0u8; SAMPLE_FILE_HEADER_SIZE];
    reader.read_exact(&mut buf)?;
    SampleFileHeader::decode(&buf)
}

/// Читает одну командную запись из текущей позиции потока.
pub fn read_cmd_header<R: Read>(reader: &mut R) -> CaptureResult<CmdHeader> {
    let mut buf = [0u8; CMD_HEADER_SIZE];
    reader.read_exact(&mut buf)?;
    CmdHeader::decode(&buf)
}

/// Читает один заголовок медиа-выборки из текущей позиции потока.
pub fn read_sample_header<R: Read>(reader: &mut R) -> CaptureResult<SampleHeader> {
    let mut buf = [0u8; SAMPLE_HEADER_SIZE];
    reader.read_exact(&mut buf)?;
    SampleHeader::decode(&buf)
}

/// Записывает заголовок файла в поток.
pub fn write_sample_file_header<W: Write>(
    writer: &mut W,
    header: &SampleFileHeader,
) -> CaptureResult<()> {
    writer.write_all(&header.encode())?;
    Ok(())
}

/// Записывает командную запись в поток.
pub fn write_cmd_header<W: Write>(
    writer: &mut W,
    header: &CmdHeader,
) -> CaptureResult<()> {
    writer.write_all(&header.encode())?;
    Ok(())
}

/// Записывает заголовок медиа-выборки в поток.
pub fn write_sample_header<W: Write>(
    writer: &mut W,
    header: &SampleHeader,
) -> CaptureResult<()> {
    writer.write_all(&header.encode())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use mrcap_types::CaptureError;

    use super::*;

    #[test]
    fn test_file_header_stream_round_trip() {
        let header = SampleFileHeader::new(1);

        let mut raw = Vec::new();
        write_sample_file_header(&mut raw, &header).unwrap();
        assert_eq!(raw.len(), SAMPLE_FILE_HEADER_SIZE);

        let parsed = read_sample_file_header(&mut Cursor::new(raw)).unwrap();
        assert_eq!(parsed, header);
    }

    #[test]
    fn test_read_from_short_stream_is_io_error() {
        // Поток оборвался до конца записи — ошибка уровня I/O, не формата
        let raw = vec![0u8; 10];
        let err = read_sample_file_header(&mut Cursor::new(raw)).unwrap_err();
        assert!(matches!(err, CaptureError::Io(_)));
    }

    #[test]
    fn test_read_rejects_foreign_stream() {
        let raw = vec![0u8; SAMPLE_FILE_HEADER_SIZE];
        let err = read_sample_file_header(&mut Cursor::new(raw)).unwrap_err();
        assert!(matches!(err, CaptureError::BadMagic { .. }));
    }

    #[test]
    fn test_cmd_header_stream_round_trip() {
        let mut buf = [0u8; CMD_HEADER_SIZE];
        buf[0..4].copy_from_slice(&64u32.to_le_bytes());
        buf[4..8].copy_from_slice(&3i32.to_le_bytes());
        let header = CmdHeader::decode(&buf).unwrap();

        let mut raw = Vec::new();
        write_cmd_header(&mut raw, &header).unwrap();

        let parsed = read_cmd_header(&mut Cursor::new(raw)).unwrap();
        assert_eq!(parsed, header);
    }

    #[test]
    fn test_sample_header_stream_round_trip() {
        let mut buf = [0u8; SAMPLE_HEADER_SIZE];
        buf[0..4].copy_from_slice(&4i32.to_le_bytes()); // аудио
        buf[32..36].copy_from_slice(&960i32.to_le_bytes());
        let header = SampleHeader::decode(&buf).unwrap();

        let mut raw = Vec::new();
        write_sample_header(&mut raw, &header).unwrap();

        let parsed = read_sample_header(&mut Cursor::new(raw)).unwrap();
        assert_eq!(parsed, header);
        assert_eq!(parsed.data_size, 960);
    }

    #[test]
    fn test_reader_stops_at_record_boundary() {
        // После чтения заголовка позиция потока — ровно 96
        let mut raw = SampleFileHeader::new(2).encode().to_vec();
        raw.extend_from_slice(&[0xEE; 32]); // следующие данные не трогаются

        let mut cursor = Cursor::new(raw);
        read_sample_file_header(&mut cursor).unwrap();
        assert_eq!(cursor.position(), SAMPLE_FILE_HEADER_SIZE as u64);
    }
}
