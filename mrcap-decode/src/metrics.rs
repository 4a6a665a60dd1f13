use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Instant,
};

/// Метрики сессии, обновляемые lock-free.
#[derive(Debug, Default)]
pub struct DecodeMetrics {
    pub calls: AtomicU64,
    pub frames_decoded: AtomicU64,
    pub decode_errors: AtomicU64,
    pub bytes_in: AtomicU64,
}

/// Snapshot метрик для отображения / тестирования.
#[derive(Debug, Clone)]
pub struct DecodeSummary {
    pub duration_secs: f64,
    pub calls: u64,
    pub frames_decoded: u64,
    pub decode_errors: u64,
    pub bytes_in: u64,
    pub input_rate_mbps: f64,
    pub error_rate_pct: f64,
}

impl DecodeMetrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Скорость подачи битстрима в МБ/с.
    pub fn input_rate_mbps(
        &self,
        start: &Instant,
    ) -> f64 {
        let secs = start.elapsed().as_secs_f64();

        if secs < 1e-9 {
            return 0.0;
        }

        self.bytes_in.load(Ordering::Relaxed) as f64 / secs / 1_000_000.0
    }

    /// Доля вызовов, завершившихся ошибкой кодека (0.0-100.0).
    pub fn error_rate_pct(&self) -> f64 {
        let calls = self.calls.load(Ordering::Relaxed);

        if calls == 0 {
            0.0
        } else {
            self.decode_errors.load(Ordering::Relaxed) as f64 / calls as f64 * 100.0
        }
    }

    /// Итоговая сводка для вывода в конце сессии.
    pub fn summary(
        &self,
        start: &Instant,
    ) -> DecodeSummary {
        DecodeSummary {
            duration_secs: start.elapsed().as_secs_f64(),
            calls: self.calls.load(Ordering::Relaxed),
            frames_decoded: self.frames_decoded.load(Ordering::Relaxed),
            decode_errors: self.decode_errors.load(Ordering::Relaxed),
            bytes_in: self.bytes_in.load(Ordering::Relaxed),
            input_rate_mbps: self.input_rate_mbps(start),
            error_rate_pct: self.error_rate_pct(),
        }
    }
}

impl std::fmt::Display for DecodeSummary {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(f, "  Duration      : {:.1}s", self.duration_secs)?;
        writeln!(f, "  Calls         : {}", self.calls)?;
        writeln!(f, "  Frames        : {}", self.frames_decoded)?;
        writeln!(
            f,
            "  Errors        : {} ({:.2}%)",
            self.decode_errors, self.error_rate_pct
        )?;
        writeln!(f, "  Bytes in      : {:.1} MB", self.bytes_in as f64 / 1e6)?;
        writeln!(f, "  Input rate    : {:.1} MB/s", self.input_rate_mbps)?;
        write!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")
    }
}

#[cfg(test)]
mod tests {
    use std::{thread, time::Duration};

    use super::*;

    #[test]
    fn test_initial_metrics_zero() {
        let metrics = DecodeMetrics::new();
        let start = Instant::now();
        let summary = metrics.summary(&start);

        assert_eq!(summary.calls, 0);
        assert_eq!(summary.frames_decoded, 0);
        assert_eq!(summary.decode_errors, 0);
        assert_eq!(summary.bytes_in, 0);
        assert_eq!(summary.error_rate_pct, 0.0);
    }

    #[test]
    fn test_error_rate_calculation() {
        let metrics = DecodeMetrics::new();

        metrics.calls.store(50, Ordering::Relaxed);
        metrics.decode_errors.store(10, Ordering::Relaxed);

        assert!((metrics.error_rate_pct() - 20.0).abs() < 1e-6);
    }

    #[test]
    fn test_input_rate() {
        let metrics = DecodeMetrics::new();
        metrics.bytes_in.store(10_000_000, Ordering::Relaxed);

        let start = Instant::now() - Duration::from_secs(2);
        let rate = metrics.input_rate_mbps(&start);

        assert!((rate - 5.0).abs() < 0.1, "expected ~5 MB/s, got {rate}");
    }

    #[test]
    fn test_multithreaded_updates() {
        let metrics = DecodeMetrics::new();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let m = metrics.clone();
                thread::spawn(move || {
                    for _ in 0..1_000 {
                        m.calls.fetch_add(1, Ordering::Relaxed);
                        m.bytes_in.fetch_add(512, Ordering::Relaxed);
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(metrics.calls.load(Ordering::Relaxed), 4_000);
        assert_eq!(metrics.bytes_in.load(Ordering::Relaxed), 2_048_000);
    }
}
