//! Backend поверх библиотеки OpenH264 (Wels API).
//!
//! Кодек остаётся непрозрачной зависимостью: экземпляр создаётся и
//! инициализируется один раз на сессию, каждый вызов пробрасывает порцию
//! битстрима и возвращает результат библиотеки без интерпретации.

use openh264::decoder::{Decoder, DecoderConfig as WelsConfig};
use openh264::formats::YUVSource;
use openh264::OpenH264API;

use crate::{
    backend::{DecodedFrame, DecoderInfo, FrameDecoder},
    DecodeError, DecodeResult, DecoderConfig, TraceLevel,
};

/// Код состояния для отказов библиотеки: числовое значение включено в
/// текст ошибки, отдельного поля binding не раскрывает.
const NATIVE_FAILURE_STATUS: i64 = -1;

pub struct WelsDecoder {
    inner: Decoder,
}

impl WelsDecoder {
    /// Создаёт и инициализирует экземпляр кодека для одной сессии.
    pub fn new(config: &DecoderConfig) -> DecodeResult<Self> {
        if config.parse_only {
            return Err(DecodeError::Session(
                "parse-only mode is not supported by the OpenH264 backend".to_string(),
            ));
        }

        let api = OpenH264API::from_source();
        let wels = WelsConfig::new().debug(config.trace_level.as_i32() >= TraceLevel::Info.as_i32());

        let inner = Decoder::with_api_config(api, wels)
            .map_err(|e| DecodeError::Session(format!("decoder init failed: {e}")))?;

        Ok(Self { inner })
    }
}

impl FrameDecoder for WelsDecoder {
    fn info(&self) -> DecoderInfo {
        DecoderInfo {
            name: "OpenH264".to_string(),
            parse_only: false,
        }
    }

    fn decode(
        &mut self,
        bitstream: &[u8],
    ) -> DecodeResult<Option<DecodedFrame>> {
        match self.inner.decode(bitstream) {
            Ok(Some(yuv)) => Ok(Some(copy_planes(&yuv))),
            Ok(None) => Ok(None),
            Err(e) => Err(DecodeError::Codec {
                status: NATIVE_FAILURE_STATUS,
                detail: e.to_string(),
            }),
        }
    }
}

/// Переписывает плоскости без межстрочных отступов библиотеки.
fn copy_planes<S: YUVSource>(yuv: &S) -> DecodedFrame {
    let (width, height) = yuv.dimensions();
    let (stride_y, stride_u, stride_v) = yuv.strides();

    let mut data = Vec::with_capacity(width * height * 3 / 2);

    let y = yuv.y();
    for row in 0..height {
        let start = row * stride_y;
        data.extend_from_slice(&y[start..start + width]);
    }

    let u = yuv.u();
    for row in 0..height / 2 {
        let start = row * stride_u;
        data.extend_from_slice(&u[start..start + width / 2]);
    }

    let v = yuv.v();
    for row in 0..height / 2 {
        let start = row * stride_v;
        data.extend_from_slice(&v[start..start + width / 2]);
    }

    DecodedFrame {
        width: width as u32,
        height: height as u32,
        data,
    }
}
