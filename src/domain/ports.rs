use crate::utils::error::Result;

/// Destination for the human-readable lines produced by channels and demos.
pub trait OutputSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// A medium a notification can be delivered through.
///
/// Implementations accept any string, including the empty one, and never fail.
pub trait NotificationChannel: Send + Sync {
    fn send(&self, message: &str);
}

pub trait Shape {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

/// Operations an account exposes; balance state stays with the implementor.
pub trait Account {
    fn deposit(&mut self, amount: f64) -> Result<()>;
    fn withdraw(&mut self, amount: f64) -> Result<()>;
}
