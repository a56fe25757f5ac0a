use serde::{Deserialize, Serialize};

use crate::entity::{Authority, TokenMetadata, DEFAULT_NAME, DEFAULT_SYMBOL};

/// Body of `POST /token-metadata`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadataRequest<'a> {
    pub mint_accounts: Vec<&'a str>,
    pub include_off_chain: bool,
    pub disable_cache: bool,
}

impl<'a> TokenMetadataRequest<'a> {
    pub fn for_mint(mint: &'a str) -> Self {
        Self {
            mint_accounts: vec![mint],
            include_off_chain: false,
            disable_cache: false,
        }
    }
}

// Keeps an absent key (None) apart from an explicit null (Some(None))
pub mod nullable {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

/// One element of the `/token-metadata` response list
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeliusTokenMetadata {
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub mint_authority: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub freeze_authority: Option<Option<String>>,

    #[serde(default)]
    pub on_chain_metadata: Option<OnChainMetadata>,

    #[serde(default)]
    pub token_info: Option<NameAndSymbol>,

    #[serde(default)]
    pub legacy_metadata: Option<NameAndSymbol>,

    #[serde(default)]
    pub on_chain_account_info: Option<OnChainAccountInfo>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OnChainMetadata {
    #[serde(default)]
    pub metadata: Option<MetadataAccount>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MetadataAccount {
    #[serde(default)]
    pub data: Option<NameAndSymbol>,
}

/// Name and symbol; non-string values are skipped rather than rejected
#[derive(Debug, Default, Deserialize)]
pub struct NameAndSymbol {
    #[serde(default)]
    pub name: Option<serde_json::Value>,
    #[serde(default)]
    pub symbol: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnChainAccountInfo {
    #[serde(default)]
    pub account_info: Option<AccountInfo>,
}

/// Raw account; `data` is either a parsed object or an encoded blob
#[derive(Debug, Default, Deserialize)]
pub struct AccountInfo {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// `data.parsed.info` of an SPL mint account
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMintInfo {
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub mint_authority: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub freeze_authority: Option<Option<String>>,
}

impl HeliusTokenMetadata {
    fn parsed_mint_info(&self) -> Option<ParsedMintInfo> {
        let data = self
            .on_chain_account_info
            .as_ref()?
            .account_info
            .as_ref()?
            .data
            .as_ref()?;
        let info = data.get("parsed")?.get("info")?;

        serde_json::from_value(info.clone()).ok()
    }

    fn on_chain_names(&self) -> Option<&NameAndSymbol> {
        self.on_chain_metadata.as_ref()?.metadata.as_ref()?.data.as_ref()
    }

    /// Walks on-chain metadata, then token info, then legacy metadata
    fn lookup<F>(&self, field: F) -> Option<String>
    where
        F: Fn(&NameAndSymbol) -> Option<&serde_json::Value>,
    {
        [
            self.on_chain_names(),
            self.token_info.as_ref(),
            self.legacy_metadata.as_ref(),
        ]
        .into_iter()
        .flatten()
        .find_map(|names| field(names).and_then(|value| value.as_str()).and_then(clean))
    }
}

impl From<HeliusTokenMetadata> for TokenMetadata {
    fn from(raw: HeliusTokenMetadata) -> Self {
        let name = raw
            .lookup(|names| names.name.as_ref())
            .unwrap_or_else(|| DEFAULT_NAME.to_string());
        let symbol = raw
            .lookup(|names| names.symbol.as_ref())
            .unwrap_or_else(|| DEFAULT_SYMBOL.to_string());

        let parsed = raw.parsed_mint_info().unwrap_or_default();
        let mint_authority = Authority::from_field(raw.mint_authority.or(parsed.mint_authority));
        let freeze_authority =
            Authority::from_field(raw.freeze_authority.or(parsed.freeze_authority));

        TokenMetadata {
            name,
            symbol,
            mint_authority,
            freeze_authority,
        }
    }
}

// On-chain metadata strings are NUL padded to a fixed width
fn clean(value: &str) -> Option<String> {
    let value = value.trim_end_matches('\0').trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
