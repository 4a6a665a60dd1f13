//! Чтение многобайтовых значений с фиксированных смещений.
//!
//! Формат целиком little-endian; вызывающий обязан заранее проверить
//! размер буфера (все декодеры делают это первой строкой).

pub fn read_u16_at(
    buf: &[u8],
    off: &mut usize,
) -> u16 {
    let b = [buf[*off], buf[*off + 1]];
    *off += 2;
    u16::from_le_bytes(b)
}

pub fn read_u32_at(
    buf: &[u8],
    off: &mut usize,
) -> u32 {
    let b = [buf[*off], buf[*off + 1], buf[*off + 2], buf[*off + 3]];
    *off += 4;
    u32::from_le_bytes(b)
}

pub fn read_i32_at(
    buf: &[u8],
    off: &mut usize,
) -> i32 {
    let b = [buf[*off], buf[*off + 1], buf[*off + 2], buf[*off + 3]];
    *off += 4;
    i32::from_le_bytes(b)
}

pub fn read_i64_at(
    buf: &[u8],
    off: &mut usize,
) -> i64 {
    let b = [
        buf[*off],
        buf[*off + 1],
        buf[*off + 2],
        buf[*off + 3],
        buf[*off + 4],
        buf[*off + 5],
        buf[*off + 6],
        buf[*off + 7],
    ];
    *off += 8;
    i64::from_le_bytes(b)
}

/// Копирует `N` сырых байт (неразобранные/зарезервированные области).
pub fn read_array_at<const N: usize>(
    buf: &[u8],
    off: &mut usize,
) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&buf[*off..*off + N]);
    *off += N;
    out
}
