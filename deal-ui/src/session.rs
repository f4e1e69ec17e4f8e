//! Interactive session state for the simulator.
//!
//! Owns the live copy of the deal inputs, the minimum floor and the
//! advanced-cost flag between persistence boundaries, and enforces the one
//! state-mutation rule the data model has: disabling advanced-cost mode
//! zeroes the advanced cost fields.

use rust_decimal::Decimal;

use deal_core::models::{DealInputs, MarginResult};
use deal_core::store::PersistedSnapshot;
use deal_core::MarginWorksheet;

/// The simulator's working state for one run.
///
/// The margin result is never cached here: [`Session::calculate`] reruns
/// the worksheet on every call, so a result can never go stale.
#[derive(Debug, Clone)]
pub struct Session {
    inputs: DealInputs,
    minimum_floor: Decimal,
    advanced_costs_enabled: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::fresh()
    }
}

impl Session {
    /// Starts a session from persisted state.
    pub fn from_snapshot(snapshot: PersistedSnapshot) -> Self {
        Self {
            inputs: snapshot.inputs,
            minimum_floor: snapshot.minimum_floor,
            advanced_costs_enabled: snapshot.advanced_costs_enabled,
        }
    }

    /// Starts a fresh session from the default snapshot.
    pub fn fresh() -> Self {
        Self::from_snapshot(PersistedSnapshot::default())
    }

    /// The state to persist, as a single unit.
    pub fn snapshot(&self) -> PersistedSnapshot {
        PersistedSnapshot {
            advanced_costs_enabled: self.advanced_costs_enabled,
            minimum_floor: self.minimum_floor,
            inputs: self.inputs.clone(),
        }
    }

    pub fn inputs(&self) -> &DealInputs {
        &self.inputs
    }

    /// Mutable access for field edits. Field values arrive pre-coerced by
    /// the parsing boundary, so there is nothing to validate here.
    pub fn inputs_mut(&mut self) -> &mut DealInputs {
        &mut self.inputs
    }

    pub fn minimum_floor(&self) -> Decimal {
        self.minimum_floor
    }

    pub fn set_minimum_floor(
        &mut self,
        floor: Decimal,
    ) {
        self.minimum_floor = floor;
    }

    pub fn advanced_costs_enabled(&self) -> bool {
        self.advanced_costs_enabled
    }

    /// Switches advanced-cost mode.
    ///
    /// On an enabled-to-disabled transition, software costs and agency fees
    /// are reset to zero in the same update. The values are genuinely
    /// discarded, not hidden: toggling back on starts both fields at zero.
    pub fn set_advanced_costs(
        &mut self,
        enabled: bool,
    ) {
        if self.advanced_costs_enabled && !enabled {
            self.inputs.software_costs = Decimal::ZERO;
            self.inputs.agency_fees = Decimal::ZERO;
        }
        self.advanced_costs_enabled = enabled;
    }

    /// Runs the margin worksheet over the current state.
    pub fn calculate(&self) -> MarginResult {
        MarginWorksheet::new(self.advanced_costs_enabled, self.minimum_floor)
            .calculate(&self.inputs)
    }
}
