//! Recurring cost resolution.
//!
//! Pricing model: hardware is amortized into a yearly figure alongside
//! flat per-rack-unit and per-amp rates. The monthly figure is the
//! undiscounted yearly total over twelve; only the yearly figure carries
//! the 5% discount. That asymmetry is the billing rule, not an accident.
//! Do not normalize it.

use crate::config::Configuration;
use serde::Serialize;

/// Datacenter circuits are 208V; amperage is derived from watts at that
/// voltage.
pub const CIRCUIT_VOLTAGE: f64 = 208.0;

const YEARLY_RATE_PER_RACK_UNIT: f64 = 420.0;
const YEARLY_RATE_PER_AMP: f64 = 420.0;
const YEARLY_DISCOUNT_FACTOR: f64 = 0.95;
const MONTHS_PER_YEAR: f64 = 12.0;

///
/// CostBreakdown
///
/// Derived power and pricing figures for a configuration, including the
/// intermediate components a quote displays.
///

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub total_power_watts: u32,
    pub amperage: f64,
    pub hardware_cost: f64,
    pub effective_rack_units: f64,
    pub yearly_rack_cost: f64,
    pub yearly_power_cost: f64,
    pub monthly_cost: f64,
    pub yearly_cost: f64,
}

/// Compute the full cost breakdown for a configuration.
///
/// Absent components contribute nothing: a configuration without a
/// chassis has zero rack units, one without a CPU draws no CPU power.
#[must_use]
pub fn compute_costs(config: &Configuration) -> CostBreakdown {
    let total_power_watts = config.total_power();
    let amperage = f64::from(total_power_watts) / CIRCUIT_VOLTAGE;

    let cpu_multiplier = if config.dual_cpu { 2.0 } else { 1.0 };
    let hardware_cost = config.chassis.as_ref().map_or(0.0, |c| c.price)
        + config
            .cpu
            .as_ref()
            .map_or(0.0, |cpu| cpu.price * cpu_multiplier)
        + config
            .gpu
            .iter()
            .map(|entry| entry.gpu.price * f64::from(entry.quantity))
            .sum::<f64>()
        + config.ram.as_ref().map_or(0.0, |ram| ram.price)
        + config.storage.iter().map(|drive| drive.price).sum::<f64>();

    let units = config
        .chassis
        .as_ref()
        .map_or(0, |chassis| rack_units(&chassis.form_factor));
    // Multi-node enclosures share rack space across nodes, so each node
    // is attributed half the units.
    let effective_rack_units = if config.chassis.as_ref().is_some_and(|c| c.multi_node) {
        f64::from(units) / 2.0
    } else {
        f64::from(units)
    };

    let yearly_rack_cost = effective_rack_units * YEARLY_RATE_PER_RACK_UNIT;
    let yearly_power_cost = amperage * YEARLY_RATE_PER_AMP;
    let yearly_before_discount = hardware_cost + yearly_rack_cost + yearly_power_cost;

    CostBreakdown {
        total_power_watts,
        amperage,
        hardware_cost,
        effective_rack_units,
        yearly_rack_cost,
        yearly_power_cost,
        monthly_cost: yearly_before_discount / MONTHS_PER_YEAR,
        yearly_cost: yearly_before_discount * YEARLY_DISCOUNT_FACTOR,
    }
}

/// Rack units from a chassis form-factor label: the leading digit run of
/// `"2U"` is 2. Unparseable labels attribute zero units.
#[must_use]
pub fn rack_units(form_factor: &str) -> u32 {
    let digits: &str = form_factor
        .split_once(|c: char| !c.is_ascii_digit())
        .map_or(form_factor, |(head, _)| head);

    digits.parse().unwrap_or(0)
}

///
/// TESTS
///
