use crate::core::tracker::OutputFormat;
use crate::domain::model::DeliveryStage;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "order-tracking")]
#[command(about = "Render the delivery status of shipped orders")]
pub struct CliConfig {
    /// Path to a TOML journey file; the built-in demo journey is used when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Only render states of this stage (received_at_depot, dispatched, delivered)
    #[arg(long)]
    pub stage: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write logs as JSON")]
    pub json_logs: bool,

    /// Show what would be rendered without rendering it
    #[arg(long)]
    pub dry_run: bool,
}

impl CliConfig {
    /// 解析 --stage，名稱不存在時回傳 UnknownStage
    pub fn stage_filter(&self) -> Result<Option<DeliveryStage>> {
        self.stage.as_deref().map(str::parse).transpose()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
