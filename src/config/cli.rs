use crate::app::demos::DemoKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "oop-demos")]
#[command(about = "Runs the encapsulation, abstraction and dependency inversion demonstrations")]
pub struct CliConfig {
    #[arg(long, help = "TOML file describing the demo scenario")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = DemoKind::All)]
    pub demo: DemoKind,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
