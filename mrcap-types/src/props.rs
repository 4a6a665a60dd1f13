/// Свойства видео-потока (24 байта в блоке свойств выборки)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoProperty {
    /// Идентификатор участника
    pub name_ident: i32,
    /// Зарезервировано
    pub reserved_1: [u8; 4],
    /// Ширина кадра в пикселях
    pub width: i32,
    /// Высота кадра в пикселях
    pub height: i32,
    /// Зарезервировано
    pub reserved_2: [u8; 8],
}

/// Свойства записи курсора (24 байта в блоке свойств выборки)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorProperty {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Идентификатор участника
    pub name_ident: i32,
    /// Тег типа курсора
    pub kind: i32,
}
