use mockall::automock;
use sysinfo::{Pid, System};
use tracing::warn;

/// Peak process memory usage reader, in bytes.
#[automock]
pub trait PeakMemoryReader {
    fn peak_memory_bytes(&mut self) -> u64;
}

/// Tracks the largest resident set size observed for the current process.
pub struct ProcessMemoryReader {
    system: System,
    pid: Option<Pid>,
    peak: u64,
}

impl ProcessMemoryReader {
    pub fn new() -> Self {
        let pid = sysinfo::get_current_pid().ok();
        if pid.is_none() {
            warn!("could not resolve current pid, memory deltas will read as zero");
        }

        Self {
            system: System::new(),
            pid,
            peak: 0,
        }
    }
}

impl Default for ProcessMemoryReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PeakMemoryReader for ProcessMemoryReader {
    fn peak_memory_bytes(&mut self) -> u64 {
        if let Some(pid) = self.pid {
            if self.system.refresh_process(pid) {
                if let Some(process) = self.system.process(pid) {
                    self.peak = self.peak.max(process.memory());
                }
            }
        }

        self.peak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_never_decrease() {
        let mut reader = ProcessMemoryReader::new();

        let first = reader.peak_memory_bytes();
        let second = reader.peak_memory_bytes();

        assert!(second >= first);
    }
}
