mod format_bytes;
mod interpolate;

pub use format_bytes::format_bytes;
pub use interpolate::interpolate;
