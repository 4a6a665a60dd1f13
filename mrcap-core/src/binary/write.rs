//! Запись многобайтовых значений на фиксированные смещения (little-endian).

pub fn write_u16_at(
    buf: &mut [u8],
    off: &mut usize,
    val: u16,
) {
    buf[*off..*off + 2].copy_from_slice(&val.to_le_bytes());
    *off += 2;
}

pub fn write_u32_at(
    buf: &mut [u8],
    off: &mut usize,
    val: u32,
) {
    buf[*off..*off + 4].copy_from_slice(&val.to_le_bytes());
    *off += 4;
}

pub fn write_i32_at(
    buf: &mut [u8],
    off: &mut usize,
    val: i32,
) {
    buf[*off..*off + 4].copy_from_slice(&val.to_le_bytes());
    *off += 4;
}

pub fn write_i64_at(
    buf: &mut [u8],
    off: &mut usize,
    val: i64,
) {
    buf[*off..*off + 8].copy_from_slice(&val.to_le_bytes());
    *off += 8;
}

/// Записывает `N` сырых байт дословно (store-and-replay).
pub fn write_array_at<const N: usize>(
    buf: &mut [u8],
    off: &mut usize,
    val: &[u8; N],
) {
    buf[*off..*off + N].copy_from_slice(val);
    *off += N;
}
