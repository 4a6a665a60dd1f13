/// Тип медиа-потока в записи выборки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// Аудио-дорожка
    Audio,
    /// Видео с веб-камеры
    VideoWebcam,
    /// Видео демонстрации экрана
    VideoScreenShare,
    /// Аватар участника
    Avatar,
    /// Позиция курсора
    Cursor,
    /// Незадокументированный тег (сохраняется без потерь)
    Unknown(i32),
}

impl MediaType {
    pub fn from_i32(v: i32) -> Self {
        match v {
            4 => MediaType::Audio,
            0x10 => MediaType::VideoWebcam,
            0x20 => MediaType::VideoScreenShare,
            0x40 => MediaType::Avatar,
            0x1000 => MediaType::Cursor,
            other => MediaType::Unknown(other),
        }
    }

    pub fn as_i32(&self) -> i32 {
        match self {
            MediaType::Audio => 4,
            MediaType::VideoWebcam => 0x10,
            MediaType::VideoScreenShare => 0x20,
            MediaType::Avatar => 0x40,
            MediaType::Cursor => 0x1000,
            MediaType::Unknown(v) => *v,
        }
    }

    /// Видео-поток (веб-камера или демонстрация экрана).
    pub fn is_video(&self) -> bool {
        matches!(self, MediaType::VideoWebcam | MediaType::VideoScreenShare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_round_trip() {
        for v in [4, 0x10, 0x20, 0x40, 0x1000] {
            assert_eq!(MediaType::from_i32(v).as_i32(), v);
        }
    }

    #[test]
    fn test_unknown_tag_preserved() {
        let t = MediaType::from_i32(0x7777);
        assert_eq!(t, MediaType::Unknown(0x7777));
        assert_eq!(t.as_i32(), 0x7777);
    }

    #[test]
    fn test_is_video() {
        assert!(MediaType::VideoWebcam.is_video());
        assert!(MediaType::VideoScreenShare.is_video());
        assert!(!MediaType::Audio.is_video());
        assert!(!MediaType::Cursor.is_video());
    }
}
