mod clock;
mod memory;

pub use clock::{Clock, MockClock, WallClock};
pub use memory::{MockPeakMemoryReader, PeakMemoryReader, ProcessMemoryReader};
