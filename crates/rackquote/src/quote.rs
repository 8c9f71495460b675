//! Finished-quote assembly.
//!
//! A quote is the value payload an external collaborator persists or
//! renders: the customer label, the selected components, the derived
//! cost figures, and a plain-text block for pasting into chat or email.
//! Timestamps are supplied by the caller; the engine reads no clocks.

use crate::error::{Error, ErrorKind, ErrorOrigin, QuoteErrorKind};
use rackquote_core::{
    bays::{self, BayUsage},
    config::Configuration,
    cost::{self, CIRCUIT_VOLTAGE, CostBreakdown},
    gpu::GpuTotals,
};
use serde::Serialize;
use std::fmt::Write as _;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

///
/// QuoteSummary
///
/// Everything a save-quote collaborator needs, already derived. The
/// engine defines the values, not the persistence format.
///

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummary {
    pub customer: String,
    pub filename: String,
    pub generated_at: String,
    pub configuration: Configuration,
    pub costs: CostBreakdown,
    pub gpu_totals: GpuTotals,
    pub bay_usage: BayUsage,
}

impl QuoteSummary {
    /// Assemble a quote for a configuration as it stands. Partial
    /// configurations are fine: missing components render as `None`
    /// and contribute nothing to the figures.
    pub fn build(
        customer: impl Into<String>,
        config: &Configuration,
        generated_at: OffsetDateTime,
    ) -> Result<Self, Error> {
        let customer = customer.into();
        let timestamp = generated_at.format(&Rfc3339).map_err(|err| {
            Error::new(
                ErrorKind::Quote(QuoteErrorKind::Timestamp),
                ErrorOrigin::Quote,
                err.to_string(),
            )
        })?;

        let filename = format!("{}-{}", slug(&customer), sanitize_timestamp(&timestamp));

        Ok(Self {
            customer,
            filename,
            generated_at: timestamp,
            configuration: config.clone(),
            costs: cost::compute_costs(config),
            gpu_totals: GpuTotals::of(&config.gpu),
            bay_usage: bays::bay_usage(&config.storage),
        })
    }

    /// The plain-text quote block.
    #[must_use]
    pub fn render_text(&self) -> String {
        let config = &self.configuration;
        let mut out = String::new();

        let _ = writeln!(out, "[Customer] {}", self.customer);
        let _ = writeln!(out);

        let cpu_line = config.cpu.as_ref().map_or_else(
            || "None".to_string(),
            |cpu| {
                let sockets = if config.dual_cpu { 2 } else { 1 };
                let prefix = if config.dual_cpu { "2x " } else { "" };
                format!(
                    "{prefix}{} ({}C/{}T)",
                    cpu.model,
                    cpu.cores * sockets,
                    cpu.threads * sockets,
                )
            },
        );
        let _ = writeln!(out, "[CPU] {cpu_line}");

        let gpu_line = if config.gpu.is_empty() {
            "None".to_string()
        } else {
            config
                .gpu
                .iter()
                .map(|entry| format!("{}x {}", entry.quantity, entry.gpu.model))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let _ = writeln!(out, "[GPU] {gpu_line}");

        let ram_line = config.ram.as_ref().map_or_else(
            || "None".to_string(),
            |ram| {
                let ecc = if ram.ecc { " ECC" } else { "" };
                format!("{} {} {}MHz{ecc}", ram.capacity_label(), ram.kind, ram.speed)
            },
        );
        let _ = writeln!(out, "[RAM] {ram_line}");

        let storage_line = if config.storage.is_empty() {
            "None".to_string()
        } else {
            config
                .storage
                .iter()
                .map(|drive| format!("{} {}", drive.capacity_label(), drive.kind))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let _ = writeln!(out, "[Storage] {storage_line}");

        let chassis_line = config.chassis.as_ref().map_or_else(
            || "None".to_string(),
            |chassis| {
                format!(
                    "{} {} ({})",
                    chassis.manufacturer, chassis.model, chassis.form_factor
                )
            },
        );
        let _ = writeln!(out, "[Chassis] {chassis_line}");

        let _ = writeln!(out);
        let _ = writeln!(out, "[System Totals]");
        let _ = writeln!(
            out,
            "- Power: {}W ({:.2}A @ {:.0}V)",
            self.costs.total_power_watts, self.costs.amperage, CIRCUIT_VOLTAGE,
        );
        let _ = writeln!(out, "- Monthly Cost: ${:.0}", self.costs.monthly_cost.round());
        let _ = writeln!(
            out,
            "- Yearly Cost: ${:.0} (includes 5% discount)",
            self.costs.yearly_cost.round(),
        );

        out
    }
}

/// Customer label reduced to a filename-safe slug: every run of
/// non-alphanumeric characters becomes a dash.
fn slug(customer: &str) -> String {
    customer
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

/// RFC 3339 timestamps carry `:` and `.`, which are hostile to
/// filenames; both become dashes.
fn sanitize_timestamp(timestamp: &str) -> String {
    timestamp.replace([':', '.'], "-")
}

///
/// TESTS
///
