use serde::{Deserialize, Serialize};

use super::TokenMetadata;

const PUMP_FUN_SUFFIX: &str = "pump";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub mint: String,
    pub metadata: TokenMetadata,
    pub is_pump_fun: bool,
}

impl ScanReport {
    pub fn new(mint: impl Into<String>, metadata: TokenMetadata) -> Self {
        let mint = mint.into();
        let is_pump_fun = mint.ends_with(PUMP_FUN_SUFFIX);

        Self {
            mint,
            metadata,
            is_pump_fun,
        }
    }
}
