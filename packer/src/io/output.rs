use serde::{Deserialize, Serialize};

use crate::config::PackerConfig;
use knapsack_rs::io::ext_repr::{ExtKPInstance, ExtKPSolution};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct KPOutput {
    #[serde(flatten)]
    pub instance: ExtKPInstance,
    pub solution: ExtKPSolution,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct PackerOutput {
    pub outputs: Vec<KPOutput>,
    pub config: PackerConfig,
}
