/// Заголовок файла захвата (фиксированный размер 96 байт)
///
/// Начинается с двух магических констант; всё остальное доверяется только
/// после их проверки. Неразобранные области сохраняются дословно, чтобы
/// кодирование было обратным к декодированию без потери данных.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleFileHeader {
    /// Магическая константа начала, всегда 0x2C05F158
    pub header: u32,
    /// Магическая константа-пара, всегда 0x84AD52E2
    pub trailer: u32,
    /// Неразобранные байты (семантика не задокументирована)
    pub unknown: [u8; 24],
    /// Версия формата (сырое значение, см. `version_number()`)
    pub version_info: u32,
    /// Смещение начала данных в байтах; на практике всегда 1024
    pub file_offset: u32,
    /// Зарезервировано; на практике заполнено нулями
    pub unused: [u8; 56],
}
