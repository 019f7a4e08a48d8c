use crate::core::{JourneyProvider, OrderDeliveryState};
use crate::domain::model::{print_status, DeliveryStage, StatusRecord};
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// One human-readable status line per state
    #[default]
    Text,
    /// One JSON object per state
    Json,
}

pub struct DeliveryTracker<P: JourneyProvider> {
    provider: P,
    stage_filter: Option<DeliveryStage>,
    format: OutputFormat,
}

impl<P: JourneyProvider> DeliveryTracker<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            stage_filter: None,
            format: OutputFormat::Text,
        }
    }

    pub fn with_stage_filter(mut self, stage: Option<DeliveryStage>) -> Self {
        self.stage_filter = stage;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// 依旅程順序輸出每個狀態，回傳輸出的筆數
    pub fn run<W: Write>(&self, out: &mut W) -> Result<usize> {
        tracing::info!(
            "🚚 Tracking journey '{}' ({} orders)",
            self.provider.journey_name(),
            self.provider.orders().len()
        );
        if let Some(stage) = self.stage_filter {
            tracing::info!("🔍 Only rendering '{}' states", stage);
        }

        let mut rendered = 0;
        for journey in self.provider.orders() {
            tracing::debug!("📦 Order: {:?}", journey.order.item());

            for state in journey.delivery_states() {
                if !self.matches(&state) {
                    tracing::debug!("Skipping {} state", state.stage());
                    continue;
                }

                self.emit(&state, out)?;
                rendered += 1;
            }
        }
        out.flush()?;

        tracing::info!("✅ Rendered {} delivery states", rendered);
        Ok(rendered)
    }

    fn matches(&self, state: &OrderDeliveryState<'_>) -> bool {
        self.stage_filter
            .map(|stage| stage == state.stage())
            .unwrap_or(true)
    }

    fn emit<W: Write>(&self, state: &OrderDeliveryState<'_>, out: &mut W) -> Result<()> {
        match self.format {
            OutputFormat::Text => print_status(state, out)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &StatusRecord::from(state))?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}
