//! Routine builder: morning/evening slots guarded by the conflict predicate.
//!
//! A product may join a slot only if it conflicts with nothing already in
//! that slot. The gate uses [`conflicts`], the same predicate as the
//! analysis, so the matrix and the routine never disagree.

use serde::{Deserialize, Serialize};
use tracing::warn;

use skinmatch_catalog::Product;
use skinmatch_core::{DomainError, DomainResult, Entity, ProductId};

use crate::engine::conflicts;

/// Time-of-day slot of a routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutineSlot {
    Morning,
    Evening,
}

impl RoutineSlot {
    pub const ALL: [RoutineSlot; 2] = [RoutineSlot::Morning, RoutineSlot::Evening];

    pub fn label(self) -> &'static str {
        match self {
            RoutineSlot::Morning => "AM",
            RoutineSlot::Evening => "PM",
        }
    }
}

impl core::fmt::Display for RoutineSlot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Slot assignments, stored as product ids.
///
/// Products themselves come from the caller's selection, which is passed to
/// every query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Routine {
    morning: Vec<ProductId>,
    evening: Vec<ProductId>,
}

impl Routine {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, slot: RoutineSlot) -> &Vec<ProductId> {
        match slot {
            RoutineSlot::Morning => &self.morning,
            RoutineSlot::Evening => &self.evening,
        }
    }

    fn slot_mut(&mut self, slot: RoutineSlot) -> &mut Vec<ProductId> {
        match slot {
            RoutineSlot::Morning => &mut self.morning,
            RoutineSlot::Evening => &mut self.evening,
        }
    }

    pub fn is_assigned(&self, slot: RoutineSlot, id: &ProductId) -> bool {
        self.slot(slot).contains(id)
    }

    /// Products of `selection` assigned to `slot`, in selection order.
    pub fn products_in<'a>(&self, slot: RoutineSlot, selection: &'a [Product]) -> Vec<&'a Product> {
        selection
            .iter()
            .filter(|p| self.is_assigned(slot, p.id()))
            .collect()
    }

    /// Slot members (other than `product` itself) that conflict with `product`.
    pub fn conflicts_in<'a>(
        &self,
        slot: RoutineSlot,
        product: &Product,
        selection: &'a [Product],
    ) -> Vec<&'a Product> {
        self.products_in(slot, selection)
            .into_iter()
            .filter(|member| member.id() != product.id() && conflicts(member, product))
            .collect()
    }

    /// Whether toggling `product` on in `slot` is allowed.
    ///
    /// Products already in the slot can always be toggled off.
    pub fn can_assign(&self, slot: RoutineSlot, product: &Product, selection: &[Product]) -> bool {
        self.is_assigned(slot, product.id()) || self.conflicts_in(slot, product, selection).is_empty()
    }

    /// Put `product` in `slot`, rejecting it if it conflicts with a member.
    pub fn assign(
        &mut self,
        slot: RoutineSlot,
        product: &Product,
        selection: &[Product],
    ) -> DomainResult<()> {
        if !selection.iter().any(|p| p.id() == product.id()) {
            return Err(DomainError::not_found(format!(
                "{} is not in the current selection",
                product.name()
            )));
        }
        if self.is_assigned(slot, product.id()) {
            return Ok(());
        }

        let blockers = self.conflicts_in(slot, product, selection);
        if !blockers.is_empty() {
            let names: Vec<&str> = blockers.iter().map(|p| p.name()).collect();
            warn!(slot = %slot, product = product.name(), blockers = ?names, "routine assignment rejected");
            return Err(DomainError::conflict(format!(
                "{} is incompatible with {} in the {} routine",
                product.name(),
                names.join(", "),
                slot
            )));
        }

        self.slot_mut(slot).push(product.id().clone());
        Ok(())
    }

    /// Remove a product from `slot`; returns whether it was assigned.
    pub fn unassign(&mut self, slot: RoutineSlot, id: &ProductId) -> bool {
        let ids = self.slot_mut(slot);
        let before = ids.len();
        ids.retain(|assigned| assigned != id);
        ids.len() != before
    }

    /// Flip the assignment; returns `true` when the product ends up assigned.
    pub fn toggle(
        &mut self,
        slot: RoutineSlot,
        product: &Product,
        selection: &[Product],
    ) -> DomainResult<bool> {
        if self.unassign(slot, product.id()) {
            return Ok(false);
        }
        self.assign(slot, product, selection)?;
        Ok(true)
    }

    /// Drop assignments for products no longer in `selection`.
    pub fn retain_selected(&mut self, selection: &[Product]) {
        let keep = |id: &ProductId| selection.iter().any(|p| p.id() == id);
        self.morning.retain(|id| keep(id));
        self.evening.retain(|id| keep(id));
    }
}
