//! Text input: turns what a user typed into simulator arguments.
//!
//! References may be separated by whitespace, commas, or both.
//!
//! # Example
//! ```
//! use pagesim::input::{parse_capacity, parse_references};
//!
//! let refs = parse_references("7 0 1, 2").unwrap();
//! assert_eq!(refs.len(), 4);
//! assert_eq!(parse_capacity(" 3 ").unwrap(), 3);
//! ```

use crate::common::{ConfigError, Error, PageId, Result};
use crate::sim::Policy;

/// Parse a reference string into page ids.
///
/// # Errors
/// - `Error::MalformedInput` for the first token that is not an integer
/// - `ConfigError::EmptyReferences` if there are no tokens
pub fn parse_references(text: &str) -> Result<Vec<PageId>> {
    let references = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token
                .parse::<i64>()
                .map(PageId::new)
                .map_err(|_| Error::MalformedInput {
                    token: token.to_string(),
                    position,
                })
        })
        .collect::<Result<Vec<_>>>()?;

    if references.is_empty() {
        return Err(ConfigError::EmptyReferences.into());
    }
    Ok(references)
}

/// Parse a frame count.
///
/// # Errors
/// - `Error::MalformedInput` if `text` is not an integer
/// - `ConfigError::NonPositiveCapacity` if the value is 0 or negative
pub fn parse_capacity(text: &str) -> Result<usize> {
    let token = text.trim();
    let malformed = || Error::MalformedInput {
        token: token.to_string(),
        position: 0,
    };

    let value = token.parse::<i64>().map_err(|_| malformed())?;
    if value <= 0 {
        return Err(ConfigError::NonPositiveCapacity(value).into());
    }
    usize::try_from(value).map_err(|_| malformed())
}

/// Resolve a policy selection.
///
/// Each name is a policy (see [`Policy`]'s `FromStr`) or `all`. An empty
/// selection means every policy. Duplicates are dropped; the result keeps
/// [`Policy::ALL`] order.
///
/// # Errors
/// - `Error::UnknownPolicy` for the first unrecognised name
pub fn parse_policies<S: AsRef<str>>(names: &[S]) -> Result<Vec<Policy>> {
    let mut selected = Vec::with_capacity(Policy::ALL.len());
    for name in names {
        let name = name.as_ref();
        if name.trim().eq_ignore_ascii_case("all") {
            selected.extend(Policy::ALL);
        } else {
            selected.push(name.parse::<Policy>()?);
        }
    }

    if selected.is_empty() {
        return Ok(Policy::ALL.to_vec());
    }
    Ok(Policy::ALL
        .into_iter()
        .filter(|policy| selected.contains(policy))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_references_whitespace() {
        let refs = parse_references("1 2\t3\n4").unwrap();
        assert_eq!(refs, PageId::stream(&[1, 2, 3, 4]));
    }

    #[test]
    fn test_parse_references_commas_and_negatives() {
        let refs = parse_references("1,2, -3 ,,4").unwrap();
        assert_eq!(refs, PageId::stream(&[1, 2, -3, 4]));
    }

    #[test]
    fn test_parse_references_malformed() {
        let err = parse_references("1 2 x 4").unwrap_err();
        assert_eq!(
            err,
            Error::MalformedInput {
                token: "x".to_string(),
                position: 2,
            }
        );
    }

    #[test]
    fn test_parse_references_rejects_floats() {
        assert!(matches!(
            parse_references("1 2.5"),
            Err(Error::MalformedInput { position: 1, .. })
        ));
    }

    #[test]
    fn test_parse_references_empty() {
        assert_eq!(
            parse_references("  , ").unwrap_err(),
            Error::InvalidConfiguration(ConfigError::EmptyReferences)
        );
    }

    #[test]
    fn test_parse_policies_all() {
        assert_eq!(parse_policies(&["all"]).unwrap(), Policy::ALL.to_vec());
        assert_eq!(parse_policies(&["ALL"]).unwrap(), Policy::ALL.to_vec());
        assert_eq!(parse_policies(&["lru", "all"]).unwrap(), Policy::ALL.to_vec());
    }

    #[test]
    fn test_parse_policies_empty_means_all() {
        let none: [&str; 0] = [];
        assert_eq!(parse_policies(&none).unwrap(), Policy::ALL.to_vec());
    }

    #[test]
    fn test_parse_policies_subset_in_order() {
        let selected = parse_policies(&["optimal", "fifo", "opt"]).unwrap();
        assert_eq!(selected, vec![Policy::Fifo, Policy::Optimal]);
    }

    #[test]
    fn test_parse_policies_unknown() {
        assert_eq!(
            parse_policies(&["fifo", "clock"]).unwrap_err(),
            Error::UnknownPolicy("clock".to_string())
        );
    }

    #[test]
    fn test_parse_capacity() {
        assert_eq!(parse_capacity("4").unwrap(), 4);
        assert_eq!(
            parse_capacity("0").unwrap_err(),
            Error::InvalidConfiguration(ConfigError::NonPositiveCapacity(0))
        );
        assert_eq!(
            parse_capacity("-2").unwrap_err(),
            Error::InvalidConfiguration(ConfigError::NonPositiveCapacity(-2))
        );
        assert!(matches!(
            parse_capacity("three"),
            Err(Error::MalformedInput { .. })
        ));
    }
}
