pub mod account;
pub mod notifier;
pub mod shapes;
