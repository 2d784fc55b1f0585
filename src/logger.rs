use crate::resources::{Clock, PeakMemoryReader, ProcessMemoryReader, WallClock};
use crate::severity::Severity;
use crate::utils::{format_bytes, interpolate};
use serde_json::{Map, Value};
use tracing::debug;

const BANNER: &str = "*********************************************";
const MEMORY_PRECISION: u32 = 3;

/// State of one buffering session: the buffered lines plus the clock and
/// peak-memory baselines taken at the first admitted log call. Held in a
/// single `Option` so the buffer and the baselines are always set and
/// cleared together.
struct Session {
    started_at: f64,
    baseline_memory: u64,
    lines: Vec<String>,
}

/// Buffering leveled logger for a single unit of work.
///
/// Messages below the configured threshold are dropped. Admitted messages
/// are buffered in call order and rendered by [`ProcessLogger::flush`] into
/// one consolidated report, framed by banner lines and closed with a summary
/// of elapsed wall-clock time and peak memory delta since the first admitted
/// message.
///
/// Sequential use only: one instance per unit of work, no internal locking.
pub struct ProcessLogger {
    threshold: Option<Severity>,
    admitted: Vec<Severity>,
    session: Option<Session>,
    clock: Box<dyn Clock>,
    memory: Box<dyn PeakMemoryReader>,
}

impl ProcessLogger {
    pub fn new(threshold: Option<Severity>) -> Self {
        Self::with_resources(
            threshold,
            Box::new(WallClock),
            Box::new(ProcessMemoryReader::new()),
        )
    }

    /// Constructor with injected time and memory sources.
    pub fn with_resources(
        threshold: Option<Severity>,
        clock: Box<dyn Clock>,
        memory: Box<dyn PeakMemoryReader>,
    ) -> Self {
        let mut logger = Self {
            threshold: None,
            admitted: Vec::new(),
            session: None,
            clock,
            memory,
        };
        logger.set_level(threshold);
        logger
    }

    /// Current threshold; `None` means logging is disabled.
    pub fn level(&self) -> Option<Severity> {
        self.threshold
    }

    /// Sets the threshold and recomputes the admitted set as the descending
    /// prefix ending at `threshold`. `None` disables logging entirely.
    /// Chainable, never errors.
    pub fn set_level(&mut self, threshold: Option<Severity>) -> &mut Self {
        self.threshold = threshold;
        self.admitted = Severity::admitted_by(threshold);
        self
    }

    /// Buffers `message` with `context` interpolated, provided `level` passes
    /// the threshold; drops it otherwise. The first admitted call starts a
    /// session and captures the baselines for the flush trailer.
    pub fn log(&mut self, level: Severity, message: &str, context: &Map<String, Value>) {
        if !self.admitted.contains(&level) {
            return;
        }

        if self.session.is_none() {
            debug!(%level, "starting buffering session");
            self.session = Some(Session {
                started_at: self.clock.now_seconds(),
                baseline_memory: self.memory.peak_memory_bytes(),
                lines: vec![BANNER.to_string()],
            });
        }

        if let Some(session) = self.session.as_mut() {
            session.lines.push(format!("* {}", interpolate(message, context)));
        }
    }

    /// Renders the buffered report and ends the session.
    ///
    /// Returns an empty string when nothing was buffered. The session is
    /// taken out of the logger before the report is built, so state is reset
    /// regardless and a repeated flush yields `""`.
    pub fn flush(&mut self) -> String {
        let Some(mut session) = self.session.take() else {
            return String::new();
        };

        let elapsed = self.clock.now_seconds() - session.started_at;
        let delta = self.memory.peak_memory_bytes() as i64 - session.baseline_memory as i64;

        session.lines.push(format!(
            "* = Total execution time {:.2} seconds, total used memory: {}",
            elapsed,
            format_bytes(delta, MEMORY_PRECISION)
        ));
        session.lines.push(BANNER.to_string());

        session.lines.join("\n")
    }
}
