use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("no seeds given")]
    Empty,
    #[error("invalid seed '{0}': expected an unsigned integer or 0x-prefixed hex")]
    Invalid(String),
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse `--seeds` tokens; decimal and `0x` hex are accepted.
pub fn parse_seeds(tokens: &[String]) -> Result<Vec<u64>, SeedError> {
    if tokens.is_empty() {
        return Err(SeedError::Empty);
    }
    tokens
        .iter()
        .map(|token| {
            let parsed = match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
                Some(hex) => u64::from_str_radix(hex, 16),
                None => token.parse::<u64>(),
            };
            parsed.map_err(|_| SeedError::Invalid(token.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" alpha, ,beta,  gamma ");
        assert_eq!(parts, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn seeds_accept_decimal_and_hex() {
        let tokens = split_csv("1337, 0xff");
        assert_eq!(parse_seeds(&tokens), Ok(vec![1337, 255]));
    }

    #[test]
    fn seeds_reject_garbage() {
        assert_eq!(
            parse_seeds(&split_csv("12,abc")),
            Err(SeedError::Invalid("abc".into()))
        );
        assert_eq!(parse_seeds(&[]), Err(SeedError::Empty));
    }
}
