use super::BotError;

/// Base58 Solana addresses are at most 44 characters
pub const MAX_MINT_CHARS: usize = 64;

/// A validated `/scan` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub mint: String,
}

impl ScanRequest {
    /// Takes the first argument as the mint address, trimmed and length capped.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, BotError> {
        let mint = args
            .first()
            .map(|arg| arg.as_ref().trim())
            .filter(|mint| !mint.is_empty() && mint.chars().count() <= MAX_MINT_CHARS)
            .ok_or(BotError::Usage)?;

        Ok(Self {
            mint: mint.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_args_is_usage_error() {
        let args: Vec<String> = Vec::new();
        assert!(matches!(ScanRequest::from_args(&args), Err(BotError::Usage)));
    }

    #[test]
    fn blank_first_arg_is_usage_error() {
        assert!(matches!(
            ScanRequest::from_args(&["   "]),
            Err(BotError::Usage)
        ));
    }

    #[test]
    fn oversized_mint_is_usage_error() {
        let mint = "A".repeat(5000);
        assert!(matches!(
            ScanRequest::from_args(&[mint.as_str()]),
            Err(BotError::Usage)
        ));

        let longest = "A".repeat(MAX_MINT_CHARS);
        assert_eq!(
            ScanRequest::from_args(&[longest.as_str()]).unwrap().mint,
            longest
        );
    }

    #[test]
    fn first_arg_is_trimmed() {
        let request = ScanRequest::from_args(&[" 7xKXabcpump\n", "extra"]).unwrap();
        assert_eq!(request.mint, "7xKXabcpump");
    }
}
