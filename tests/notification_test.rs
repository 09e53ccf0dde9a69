use oop_demos::{
    EmailChannel, MemorySink, NotificationChannel, Notifier, OutputSink, SmsChannel,
    WhatsAppChannel,
};
use std::sync::Arc;

const MESSAGES: [&str; 4] = [
    "¡Bienvenido al sistema!",
    "Código de verificación: 123456",
    "",
    "[EMAIL] looks like a tag but is just content",
];

fn strip_tag(line: &str) -> &str {
    let end = line.find("] ").expect("line carries a medium tag");
    &line[end + 2..]
}

/// Builds a notifier over a channel and returns what it emitted.
fn deliver_through<C, F>(make: F, message: &str) -> Vec<String>
where
    C: NotificationChannel,
    F: FnOnce(Arc<dyn OutputSink>) -> C,
{
    let sink = MemorySink::new();
    let channel = make(Arc::new(sink.clone()));
    let notifier = Notifier::new(&channel);
    notifier.notify(message);
    sink.lines()
}

#[test]
fn test_variants_differ_only_in_tag() {
    for message in MESSAGES {
        let email = deliver_through(EmailChannel::with_sink, message);
        let sms = deliver_through(SmsChannel::with_sink, message);
        let whatsapp = deliver_through(WhatsAppChannel::with_sink, message);

        assert_eq!(email, vec![format!("[EMAIL] {}", message)]);
        assert_eq!(sms, vec![format!("[SMS] {}", message)]);
        assert_eq!(whatsapp, vec![format!("[WhatsApp] {}", message)]);

        assert_eq!(strip_tag(&email[0]), message);
        assert_eq!(strip_tag(&sms[0]), message);
        assert_eq!(strip_tag(&whatsapp[0]), message);
    }
}

#[test]
fn test_notifier_is_polymorphic_over_boxed_channels() {
    let sink = MemorySink::new();
    let shared: Arc<dyn OutputSink> = Arc::new(sink.clone());
    let channels: Vec<Box<dyn NotificationChannel>> = vec![
        Box::new(EmailChannel::with_sink(shared.clone())),
        Box::new(SmsChannel::with_sink(shared.clone())),
        Box::new(WhatsAppChannel::with_sink(shared)),
    ];

    for channel in &channels {
        Notifier::new(channel.as_ref()).notify("Tienes una nueva oferta");
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
fn test_custom_channel_plugs_into_notifier() {
    struct UppercaseChannel {
        sink: MemorySink,
    }

    impl NotificationChannel for UppercaseChannel {
        fn send(&self, message: &str) {
            self.sink.emit(&message.to_uppercase());
        }
    }

    let sink = MemorySink::new();
    let channel = UppercaseChannel { sink: sink.clone() };
    let notifier = Notifier::new(&channel);

    notifier.notify("hola");
    notifier.notify("adiós");

    assert_eq!(sink.lines(), vec!["HOLA", "ADIÓS"]);
}
