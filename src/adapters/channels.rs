//! Concrete notification channels.
//!
//! Each channel prefixes the message with its medium tag and hands the line to
//! an [`OutputSink`]. `new()` writes to stdout; `with_sink` lets callers keep
//! the transcript instead.

use crate::adapters::sinks::StdoutSink;
use crate::domain::model::Medium;
use crate::domain::ports::{NotificationChannel, OutputSink};
use std::sync::Arc;

fn deliver(sink: &dyn OutputSink, medium: Medium, message: &str) {
    tracing::debug!(medium = %medium, "Delivering notification");
    sink.emit(&medium.format(message));
}

pub struct EmailChannel {
    sink: Arc<dyn OutputSink>,
}

impl EmailChannel {
    pub fn new() -> Self {
        Self::with_sink(StdoutSink::shared())
    }

    pub fn with_sink(sink: Arc<dyn OutputSink>) -> Self {
        tracing::info!("Created EmailChannel");
        Self { sink }
    }
}

impl Default for EmailChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationChannel for EmailChannel {
    fn send(&self, message: &str) {
        deliver(self.sink.as_ref(), Medium::Email, message);
    }
}

pub struct SmsChannel {
    sink: Arc<dyn OutputSink>,
}

impl SmsChannel {
    pub fn new() -> Self {
        Self::with_sink(StdoutSink::shared())
    }

    pub fn with_sink(sink: Arc<dyn OutputSink>) -> Self {
        tracing::info!("Created SmsChannel");
        Self { sink }
    }
}

impl Default for SmsChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationChannel for SmsChannel {
    fn send(&self, message: &str) {
        deliver(self.sink.as_ref(), Medium::Sms, message);
    }
}

pub struct WhatsAppChannel {
    sink: Arc<dyn OutputSink>,
}

impl WhatsAppChannel {
    pub fn new() -> Self {
        Self::with_sink(StdoutSink::shared())
    }

    pub fn with_sink(sink: Arc<dyn OutputSink>) -> Self {
        tracing::info!("Created WhatsAppChannel");
        Self { sink }
    }
}

impl Default for WhatsAppChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationChannel for WhatsAppChannel {
    fn send(&self, message: &str) {
        deliver(self.sink.as_ref(), Medium::WhatsApp, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sinks::MemorySink;

    fn channels(sink: &MemorySink) -> Vec<Box<dyn NotificationChannel>> {
        let shared: Arc<dyn OutputSink> = Arc::new(sink.clone());
        vec![
            Box::new(EmailChannel::with_sink(shared.clone())),
            Box::new(SmsChannel::with_sink(shared.clone())),
            Box::new(WhatsAppChannel::with_sink(shared)),
        ]
    }

    #[test]
    fn test_each_channel_emits_its_tag() {
        let sink = MemorySink::new();
        for channel in channels(&sink) {
            channel.send("Tienes una nueva oferta");
        }

        assert_eq!(
            sink.lines(),
            vec![
                "[EMAIL] Tienes una nueva oferta",
                "[SMS] Tienes una nueva oferta",
                "[WhatsApp] Tienes una nueva oferta",
            ]
        );
    }

    #[test]
    fn test_send_accepts_empty_message() {
        let sink = MemorySink::new();
        for channel in channels(&sink) {
            channel.send("");
        }
        assert_eq!(sink.lines(), vec!["[EMAIL] ", "[SMS] ", "[WhatsApp] "]);
    }
}
