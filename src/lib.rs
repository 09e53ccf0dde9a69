pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{EmailChannel, MemorySink, SmsChannel, StdoutSink, WhatsAppChannel};
pub use app::demos::DemoKind;
pub use config::DemoConfig;
pub use crate::core::{
    account::BankAccount,
    notifier::Notifier,
    shapes::{Circle, Rectangle},
};
pub use domain::ports::{Account, NotificationChannel, OutputSink, Shape};
pub use utils::error::{DemoError, Result};
