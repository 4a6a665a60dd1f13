/// Заголовок командной записи (фиксированный размер 64 байта)
///
/// Магических констант не имеет — валидируется только по размеру буфера.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdHeader {
    /// Заявленный размер полезной нагрузки
    pub size_to_read: u32,
    /// Тег типа команды
    pub kind: i32,
    /// Неразобранные байты
    pub unknown_1: [u8; 8],
    /// Тег имени/идентификатора участника
    pub name_ident: i32,
    /// Зарезервировано
    pub padding_1: [u8; 4],
    /// Временная метка
    pub timing_a: u32,
    /// Неразобранные байты
    pub unknown_2: [u8; 22],
    /// Вторичный тег типа
    pub some_type: u16,
    /// Зарезервировано
    pub padding_2: [u8; 4],
    /// Размер дополнительных данных после заголовка
    pub additional_size: i32,
    /// Зарезервировано
    pub padding_3: [u8; 4],
}

impl CmdHeader {
    /// Есть ли у записи дополнительные данные после заголовка.
    pub fn has_additional_data(&self) -> bool {
        self.additional_size > 0
    }
}
