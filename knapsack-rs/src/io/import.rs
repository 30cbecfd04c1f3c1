use itertools::Itertools;
use log::debug;
use thiserror::Error;

use crate::entities::{Item, KPInstance};
use crate::io::ext_repr::ExtKPInstance;
use crate::util::{FixedPoint, KPConstraints, assertions};

/// An instance does not respect the [`KPConstraints`] and may not be handed to the solver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    #[error("package weight must not be over {max}, got {capacity}")]
    CapacityTooLarge { capacity: FixedPoint, max: FixedPoint },
    #[error("package's number of available items must not be over {max}, got {n_items}")]
    TooManyItems { n_items: usize, max: usize },
    #[error("weight of item {id} must not be over {max}, got {weight}")]
    ItemWeightTooLarge {
        id: u64,
        weight: FixedPoint,
        max: FixedPoint,
    },
    #[error("value of item {id} must not be over {max}, got {value}")]
    ItemValueTooLarge { id: u64, value: u64, max: u64 },
    #[error("item id {id} occurs more than once")]
    DuplicateItemId { id: u64 },
    #[error("total value of the items does not fit in 64 bits")]
    TotalValueOverflow,
}

/// Imports an instance into the library, after checking it against the constraints
pub fn import(
    ext_instance: &ExtKPInstance,
    constraints: &KPConstraints,
) -> Result<KPInstance, ConstraintViolation> {
    if ext_instance.capacity > constraints.max_capacity {
        return Err(ConstraintViolation::CapacityTooLarge {
            capacity: FixedPoint(ext_instance.capacity),
            max: FixedPoint(constraints.max_capacity),
        });
    }
    if ext_instance.items.len() > constraints.max_n_items {
        return Err(ConstraintViolation::TooManyItems {
            n_items: ext_instance.items.len(),
            max: constraints.max_n_items,
        });
    }
    for ext_item in &ext_instance.items {
        if ext_item.weight > constraints.max_item_weight {
            return Err(ConstraintViolation::ItemWeightTooLarge {
                id: ext_item.id,
                weight: FixedPoint(ext_item.weight),
                max: FixedPoint(constraints.max_item_weight),
            });
        }
        if ext_item.value > constraints.max_item_value {
            return Err(ConstraintViolation::ItemValueTooLarge {
                id: ext_item.id,
                value: ext_item.value,
                max: constraints.max_item_value,
            });
        }
    }
    if let Some(id) = ext_instance.items.iter().map(|i| i.id).duplicates().next() {
        return Err(ConstraintViolation::DuplicateItemId { id });
    }

    let items = ext_instance
        .items
        .iter()
        .map(|ext_item| Item::new(ext_item.id, ext_item.weight, ext_item.value))
        .collect_vec();

    // every entry of the DP table is bounded by the total value
    if !assertions::total_value_fits(&items) {
        return Err(ConstraintViolation::TotalValueOverflow);
    }

    debug!(
        "[IMPORT] instance {:?}: capacity {}, {} items",
        ext_instance.name,
        FixedPoint(ext_instance.capacity),
        items.len()
    );

    Ok(KPInstance::new(ext_instance.capacity, items))
}
