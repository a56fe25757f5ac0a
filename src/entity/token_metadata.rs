use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "Unknown";
pub const DEFAULT_SYMBOL: &str = "N/A";

/// State of a mint or freeze authority as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Authority {
    /// Some account still holds the authority
    Active(String),
    /// The provider reported the authority as null
    Renounced,
    /// The provider did not report the authority at all
    Unknown,
}

impl Authority {
    /// Builds an authority from a provider field.
    ///
    /// `None` means the key was absent, `Some(None)` means it was `null`.
    pub fn from_field(field: Option<Option<String>>) -> Self {
        match field {
            None => Authority::Unknown,
            Some(None) => Authority::Renounced,
            Some(Some(address)) if address.trim().is_empty() => Authority::Renounced,
            Some(Some(address)) => Authority::Active(address),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,   // Token name, "Unknown" when not reported
    pub symbol: String, // Token symbol, "N/A" when not reported
    pub mint_authority: Authority,
    pub freeze_authority: Authority,
}

impl Default for TokenMetadata {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            symbol: DEFAULT_SYMBOL.to_string(),
            mint_authority: Authority::Unknown,
            freeze_authority: Authority::Unknown,
        }
    }
}
