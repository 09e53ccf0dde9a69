use std::fmt;

/// Medium tag prefixed to every delivered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medium {
    Email,
    Sms,
    WhatsApp,
}

impl Medium {
    pub fn tag(&self) -> &'static str {
        match self {
            Medium::Email => "EMAIL",
            Medium::Sms => "SMS",
            Medium::WhatsApp => "WhatsApp",
        }
    }

    /// Renders `message` the way the medium emits it, e.g. `[SMS] hello`.
    pub fn format(&self, message: &str) -> String {
        format!("[{}] {}", self.tag(), message)
    }
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
