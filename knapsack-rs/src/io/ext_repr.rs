use serde::{Deserialize, Serialize};

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtItem {
    /// Unique identifier of the item
    pub id: u64,
    /// Weight in hundredths
    pub weight: u64,
    pub value: u64,
}

/// External representation of a [`KPInstance`](crate::entities::KPInstance).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtKPInstance {
    /// The name of the instance
    pub name: String,
    /// Maximum total weight of the selection, in hundredths
    pub capacity: u64,
    /// Items available for selection
    pub items: Vec<ExtItem>,
}

/// External representation of a [`KPSolution`](crate::entities::KPSolution).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtKPSolution {
    /// Ids of the selected items, ascending
    pub item_ids: Vec<u64>,
    /// Sum of the weights of the selected items, in hundredths
    pub total_weight: u64,
    /// Sum of the values of the selected items
    pub total_value: u64,
    /// Textual rendering: comma-joined ids or `-` if nothing was selected
    pub selection: String,
}
