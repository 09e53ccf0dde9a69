use crate::domain::ports::NotificationChannel;

/// High-level sender that only knows the [`NotificationChannel`] capability.
///
/// The channel is borrowed for the notifier's whole lifetime and cannot be
/// swapped afterwards.
pub struct Notifier<'a> {
    channel: &'a dyn NotificationChannel,
}

impl<'a> Notifier<'a> {
    /// Binds the notifier to `channel`. Anything that does not implement
    /// [`NotificationChannel`] is rejected at compile time:
    ///
    /// ```compile_fail
    /// use oop_demos::Notifier;
    ///
    /// struct Pigeon;
    ///
    /// let pigeon = Pigeon;
    /// let notifier = Notifier::new(&pigeon);
    /// notifier.notify("coo");
    /// ```
    ///
    /// ```
    /// use oop_demos::{MemorySink, Notifier, SmsChannel};
    /// use std::sync::Arc;
    ///
    /// let sink = MemorySink::new();
    /// let sms = SmsChannel::with_sink(Arc::new(sink.clone()));
    /// Notifier::new(&sms).notify("hola");
    /// assert_eq!(sink.lines(), vec!["[SMS] hola"]);
    /// ```
    pub fn new(channel: &'a dyn NotificationChannel) -> Self {
        tracing::info!("Created Notifier");
        Self { channel }
    }

    /// Forwards `message` to the bound channel exactly once, as-is.
    pub fn notify(&self, message: &str) {
        tracing::debug!(len = message.len(), "Notifier::notify");
        self.channel.send(message);
    }
}
