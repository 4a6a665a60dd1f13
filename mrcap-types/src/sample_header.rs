use crate::MediaType;

/// Заголовок медиа-выборки (фиксированный размер 48 байт)
///
/// Отрицательный `media_type` означает служебную запись без полезной
/// нагрузки.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleHeader {
    /// Сырой тег типа медиа (см. [`MediaType`])
    pub media_type: i32,
    /// Зарезервировано
    pub reserved_1: [u8; 4],
    /// Первая временная метка
    pub timing_a: i64,
    /// Вторая временная метка
    pub timing_b: i64,
    /// Зарезервировано
    pub reserved_2: [u8; 8],
    /// Размер данных выборки
    pub data_size: i32,
    /// Размер блока свойств
    pub property_size: i32,
    /// Зарезервировано
    pub reserved_3: [u8; 8],
}

impl SampleHeader {
    /// Типизированный тег медиа.
    pub fn kind(&self) -> MediaType {
        MediaType::from_i32(self.media_type)
    }

    /// Несёт ли запись полезную нагрузку (отрицательный тег — нет).
    pub fn carries_payload(&self) -> bool {
        self.media_type >= 0
    }
}
