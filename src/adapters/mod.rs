// Adapters layer: concrete implementations of the domain ports (channels, output sinks).

pub mod channels;
pub mod sinks;

pub use channels::{EmailChannel, SmsChannel, WhatsAppChannel};
pub use sinks::{MemorySink, StdoutSink};
