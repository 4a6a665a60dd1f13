use std::sync::{atomic::Ordering, Arc};

use log::{debug, info, warn};

use crate::{
    backend::{create_decoder, DecodedFrame, DecoderInfo, FrameDecoder},
    metrics::DecodeMetrics,
    DecodeError, DecodeResult, DecoderConfig,
};

/// Сессия декодирования.
///
/// Владеет одним инициализированным экземпляром кодека и переиспользует его
/// между вызовами. Сессий может быть сколько угодно одновременно — общего
/// состояния между ними нет; ресурсы кодека освобождаются при drop.
pub struct DecoderSession {
    backend: Box<dyn FrameDecoder>,
    config: DecoderConfig,
    metrics: Arc<DecodeMetrics>,
}

impl DecoderSession {
    /// Открывает сессию, создавая backend по конфигурации.
    pub fn open(config: DecoderConfig) -> DecodeResult<Self> {
        let backend = create_decoder(&config)?;
        Ok(Self::with_backend(config, backend))
    }

    /// Открывает сессию поверх готового backend-а (для тестов и встраивания).
    pub fn with_backend(
        config: DecoderConfig,
        backend: Box<dyn FrameDecoder>,
    ) -> Self {
        let info = backend.info();

        info!(
            "Decoder session opened: {} ({:?} bitstream, parse_only={})",
            info.name, config.bitstream, config.parse_only
        );

        Self {
            backend,
            config,
            metrics: DecodeMetrics::new(),
        }
    }

    /// Декодирует одну порцию сжатого битстрима.
    ///
    /// `Ok(None)` — вход принят, кадр ещё не готов. Ненулевой код состояния
    /// библиотеки всплывает как [`DecodeError::Codec`] без интерпретации.
    pub fn decode_frame(
        &mut self,
        bitstream: &[u8],
    ) -> DecodeResult<Option<DecodedFrame>> {
        if bitstream.is_empty() {
            return Err(DecodeError::InvalidInput(
                "empty bitstream chunk".to_string(),
            ));
        }

        self.metrics.calls.fetch_add(1, Ordering::Relaxed);
        self.metrics
            .bytes_in
            .fetch_add(bitstream.len() as u64, Ordering::Relaxed);

        match self.backend.decode(bitstream) {
            Ok(Some(frame)) => {
                self.metrics.frames_decoded.fetch_add(1, Ordering::Relaxed);
                Ok(Some(frame))
            }
            Ok(None) => Ok(None),
            Err(e) => {
                self.metrics.decode_errors.fetch_add(1, Ordering::Relaxed);
                warn!("Frame decode failed: {e}");
                Err(e)
            }
        }
    }

    /// Shared-ссылка на метрики сессии.
    pub fn metrics(&self) -> Arc<DecodeMetrics> {
        self.metrics.clone()
    }

    pub fn info(&self) -> DecoderInfo {
        self.backend.info()
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }
}

impl Drop for DecoderSession {
    fn drop(&mut self) {
        // Backend освобождается вместе с сессией — скрытого глобального
        // экземпляра нет
        debug!(
            "Decoder session closed: {} calls, {} frames",
            self.metrics.calls.load(Ordering::Relaxed),
            self.metrics.frames_decoded.load(Ordering::Relaxed),
        );
    }
}
