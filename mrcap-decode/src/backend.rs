use crate::{BackendKind, DecodeError, DecodeResult, DecoderConfig};

/// Абстракция декодера кадров.
///
/// Контракт: сжатые байты на входе, восстановленный кадр и явный результат
/// на выходе. `Ok(None)` означает, что библиотека приняла вход, но кадр ещё
/// не готов (задержка переупорядочивания).
// Реализации: [`SimulatedDecoder`] и OpenH264 backend за feature `openh264`.
pub trait FrameDecoder: Send {
    /// Информация о backend-е
    fn info(&self) -> DecoderInfo;

    /// Декодирует одну порцию битстрима.
    fn decode(
        &mut self,
        bitstream: &[u8],
    ) -> DecodeResult<Option<DecodedFrame>>;
}

/// Восстановленный кадр.
///
/// Геометрию и раскладку плоскостей определяет библиотека; здесь данные
/// хранятся как планарный Y'CbCr 4:2:0 (Y, затем Cb, затем Cr).
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    pub width: u32,
    pub height: u32,
    /// Байты плоскостей без межстрочных отступов
    pub data: Vec<u8>,
}

impl DecodedFrame {
    /// Ожидаемый размер данных для кадра 4:2:0.
    pub fn expected_len(
        width: u32,
        height: u32,
    ) -> usize {
        let luma = width as usize * height as usize;
        luma + luma / 2
    }
}

/// Информация о backend-е (для логирования).
#[derive(Debug, Clone)]
pub struct DecoderInfo {
    pub name: String,
    pub parse_only: bool,
}

/// Симулятор декодера для тестов и прогона без кодека.
///
/// Повторяет наблюдаемое поведение настоящей библиотеки: первые вызовы
/// возвращают «кадр не готов», затем на каждый вызов выдаётся один кадр,
/// люма которого детерминированно зависит от входных байт.
pub struct SimulatedDecoder {
    pub width: u32,
    pub height: u32,
    /// Сколько первых вызовов вернут `Ok(None)`
    pub delay_frames: u32,
    /// Если задан — каждый вызов завершается этим кодом состояния
    pub forced_status: Option<i64>,
    pub(crate) calls: u64,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl SimulatedDecoder {
    pub fn new() -> Self {
        Self {
            width: 640,
            height: 360,
            delay_frames: 1,
            forced_status: None,
            calls: 0,
        }
    }
}

impl Default for SimulatedDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDecoder for SimulatedDecoder {
    fn info(&self) -> DecoderInfo {
        DecoderInfo {
            name: format!("Simulated decoder {}x{}", self.width, self.height),
            parse_only: false,
        }
    }

    fn decode(
        &mut self,
        bitstream: &[u8],
    ) -> DecodeResult<Option<DecodedFrame>> {
        if let Some(status) = self.forced_status {
            return Err(DecodeError::Codec {
                status,
                detail: "simulated codec failure".to_string(),
            });
        }

        self.calls += 1;

        if self.calls <= self.delay_frames as u64 {
            return Ok(None);
        }

        let luma = self.width as usize * self.height as usize;
        let mut data = Vec::with_capacity(luma + luma / 2);

        // Люма зависит от входа, хрома нейтральная
        let y = bitstream.first().copied().unwrap_or(0x10);
        data.resize(luma, y);
        data.resize(luma + luma / 2, 0x80);

        Ok(Some(DecodedFrame {
            width: self.width,
            height: self.height,
            data,
        }))
    }
}

/// Создаёт backend по конфигурации.
pub fn create_decoder(config: &DecoderConfig) -> DecodeResult<Box<dyn FrameDecoder>> {
    match config.backend {
        BackendKind::Simulated => Ok(Box::new(SimulatedDecoder::new())),
        BackendKind::OpenH264 => {
            #[cfg(feature = "openh264")]
            {
                Ok(Box::new(crate::wels::WelsDecoder::new(config)?))
            }
            #[cfg(not(feature = "openh264"))]
            {
                let _ = config;
                Err(DecodeError::BackendUnavailable(
                    "Compiled without OpenH264 support. \
                     Rebuild with: cargo build --features openh264"
                        .to_string(),
                ))
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_delay_then_frames() {
        let mut dec = SimulatedDecoder::new();

        // Первый вызов — кадр не готов
        assert!(dec.decode(&[0x01, 0x02]).unwrap().is_none());

        // Дальше каждый вызов выдаёт кадр
        let frame = dec.decode(&[0x42, 0x00]).unwrap().unwrap();
        assert_eq!(frame.width, 640);
        assert_eq!(frame.height, 360);
        assert_eq!(frame.data.len(), DecodedFrame::expected_len(640, 360));
        assert_eq!(frame.data[0], 0x42, "люма берётся из первого байта входа");

        let luma = 640 * 360;
        assert_eq!(frame.data[luma], 0x80, "хрома нейтральная");
    }

    #[test]
    fn test_simulated_forced_status_propagates() {
        let mut dec = SimulatedDecoder {
            forced_status: Some(29),
            ..SimulatedDecoder::new()
        };

        let err = dec.decode(&[0x00]).unwrap_err();
        match err {
            DecodeError::Codec { status, .. } => assert_eq!(status, 29),
            other => panic!("ожидается Codec, получено {other:?}"),
        }
    }

    #[test]
    fn test_create_simulated_backend() {
        let config = DecoderConfig::default();
        let dec = create_decoder(&config).unwrap();
        assert!(dec.info().name.starts_with("Simulated"));
    }

    #[cfg(not(feature = "openh264"))]
    #[test]
    fn test_openh264_backend_unavailable_without_feature() {
        let config = DecoderConfig {
            backend: BackendKind::OpenH264,
            ..Default::default()
        };

        let err = match create_decoder(&config) {
            Ok(_) => panic!("ожидается ошибка BackendUnavailable"),
            Err(e) => e,
        };
        assert!(matches!(err, DecodeError::BackendUnavailable(_)));
    }

    #[test]
    fn test_expected_len_yuv420() {
        assert_eq!(DecodedFrame::expected_len(2, 2), 6);
        assert_eq!(DecodedFrame::expected_len(640, 360), 640 * 360 * 3 / 2);
    }
}
