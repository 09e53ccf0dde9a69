//! Demonstration drivers: wire the components together and write a readable
//! transcript to an [`OutputSink`].

use crate::adapters::channels::{EmailChannel, SmsChannel, WhatsAppChannel};
use crate::config::{AccountConfig, DemoConfig, NotificationsConfig, ShapesConfig};
use crate::core::account::BankAccount;
use crate::core::notifier::Notifier;
use crate::core::shapes::{print_metrics, Circle, Rectangle};
use crate::domain::ports::{Account, NotificationChannel, OutputSink, Shape};
use crate::utils::error::{DemoError, Result};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DemoKind {
    All,
    Encapsulation,
    Abstraction,
    Account,
    Notifications,
}

impl DemoKind {
    fn selected(self) -> &'static [DemoKind] {
        static EVERY: [DemoKind; 4] = [
            DemoKind::Encapsulation,
            DemoKind::Abstraction,
            DemoKind::Account,
            DemoKind::Notifications,
        ];
        match self {
            DemoKind::All => &EVERY,
            DemoKind::Encapsulation => &EVERY[0..1],
            DemoKind::Abstraction => &EVERY[1..2],
            DemoKind::Account => &EVERY[2..3],
            DemoKind::Notifications => &EVERY[3..4],
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DemoKind::All => "all",
            DemoKind::Encapsulation => "encapsulation",
            DemoKind::Abstraction => "abstraction",
            DemoKind::Account => "account",
            DemoKind::Notifications => "notifications",
        };
        f.write_str(name)
    }
}

pub fn run_encapsulation(radius: f64, sink: &dyn OutputSink) {
    let circle = Circle::new(radius);
    sink.emit(&format!("Circle area (r = {}): {:.2}", circle.radius(), circle.area()));
}

pub fn run_abstraction(config: &ShapesConfig, sink: &dyn OutputSink) {
    let rectangle = Rectangle::new(config.rectangle_width, config.rectangle_height);
    let circle = Circle::new(config.circle_radius);

    print_metrics(&rectangle, sink);
    print_metrics(&circle, sink);
}

/// Runs the account scenario and returns the final balance.
pub fn run_account(config: &AccountConfig, sink: &dyn OutputSink) -> Result<f64> {
    let mut account = BankAccount::with_balance(config.owner.as_str(), config.initial_balance);
    sink.emit(&format!(
        "Account created for {} with an initial balance of: ${}",
        account.owner(),
        account.balance()
    ));

    account.deposit(config.deposit)?;
    sink.emit(&format!("Updated balance: ${}", account.balance()));

    account.withdraw(config.withdraw)?;
    sink.emit(&format!("Updated balance: ${}", account.balance()));

    if config.apply_fee {
        account.apply_fee();
        sink.emit(&format!("Updated balance: ${}", account.balance()));
    }

    Ok(account.balance())
}

pub fn run_notifications(config: &NotificationsConfig, sink: Arc<dyn OutputSink>) {
    sink.emit("== Start of execution ==");

    let email = EmailChannel::with_sink(sink.clone());
    let sms = SmsChannel::with_sink(sink.clone());
    let whatsapp = WhatsAppChannel::with_sink(sink.clone());

    let deliveries: [(&dyn NotificationChannel, &str); 3] = [
        (&email, config.email_message.as_str()),
        (&sms, config.sms_message.as_str()),
        (&whatsapp, config.whatsapp_message.as_str()),
    ];
    let notifiers: Vec<(Notifier<'_>, &str)> = deliveries
        .iter()
        .map(|(channel, message)| (Notifier::new(*channel), *message))
        .collect();

    for (notifier, message) in &notifiers {
        notifier.notify(message);
    }

    sink.emit("== End of execution ==");
}

/// Runs every demo selected by `kind`. A failing demo is reported and the
/// rest still run; the first failure is returned once all have finished.
pub fn run(kind: DemoKind, config: &DemoConfig, sink: Arc<dyn OutputSink>) -> Result<()> {
    let mut first_error: Option<DemoError> = None;

    for demo in kind.selected() {
        tracing::info!("Running {} demo", demo);
        sink.emit(&format!("== {} ==", demo));

        let outcome = match demo {
            DemoKind::Encapsulation => {
                run_encapsulation(config.encapsulation.radius, sink.as_ref());
                Ok(())
            }
            DemoKind::Abstraction => {
                run_abstraction(&config.shapes, sink.as_ref());
                Ok(())
            }
            DemoKind::Account => run_account(&config.account, sink.as_ref()).map(|_| ()),
            DemoKind::Notifications => {
                run_notifications(&config.notifications, sink.clone());
                Ok(())
            }
            DemoKind::All => Ok(()),
        };

        if let Err(e) = outcome {
            tracing::error!("❌ {} demo failed: {}", demo, e);
            sink.emit(&format!("Error: {}", e.user_friendly_message()));
            first_error.get_or_insert(e);
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
