//! Selection paths through a menu tree.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::MAX_BRANCH_ENTRIES;

/// Sequence of single-digit selectors, one per tree level.
///
/// Parses from a digit string (`"301"`) or from indices separated by whitespace, commas or
/// slashes (`"3 0 1"`, `"3,0,1"`, `"3/0/1"`). An empty string is the root path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MenuPath(Vec<usize>);

impl MenuPath {
    pub fn new(indices: Vec<usize>) -> DomainResult<Self> {
        if let Some(bad) = indices.iter().find(|&&i| i >= MAX_BRANCH_ENTRIES) {
            return Err(DomainError::InvalidPathSyntax(format!(
                "selector {} is not a single digit",
                bad
            )));
        }
        Ok(Self(indices))
    }

    /// Path extended by one more selector.
    pub fn child(&self, index: usize) -> DomainResult<Self> {
        let mut indices = self.0.clone();
        indices.push(index);
        Self::new(indices)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl Deref for MenuPath {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl FromStr for MenuPath {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let separated = s.contains(|c: char| c.is_whitespace() || c == ',' || c == '/');

        let indices = if separated {
            s.split(|c: char| c.is_whitespace() || c == ',' || c == '/')
                .filter(|part| !part.is_empty())
                .map(|part| {
                    part.parse::<usize>().map_err(|_| {
                        DomainError::InvalidPathSyntax(format!("'{}' is not an index", part))
                    })
                })
                .collect::<DomainResult<Vec<_>>>()?
        } else {
            s.chars()
                .map(|c| {
                    c.to_digit(10).map(|d| d as usize).ok_or_else(|| {
                        DomainError::InvalidPathSyntax(format!("'{}' is not a digit", c))
                    })
                })
                .collect::<DomainResult<Vec<_>>>()?
        };

        Self::new(indices)
    }
}

impl fmt::Display for MenuPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in &self.0 {
            write!(f, "{}", i)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("301", vec![3, 0, 1])]
    #[case("3 0 1", vec![3, 0, 1])]
    #[case("3,0,1", vec![3, 0, 1])]
    #[case("3/0/1", vec![3, 0, 1])]
    #[case("", vec![])]
    #[case("  12 ", vec![1, 2])]
    fn test_parse_menu_path(#[case] input: &str, #[case] expected: Vec<usize>) {
        let path: MenuPath = input.parse().unwrap();
        assert_eq!(path.as_slice(), expected.as_slice());
    }

    #[rstest]
    #[case("3a")]
    #[case("3 10")]
    #[case("1,-1")]
    fn test_parse_menu_path_rejects(#[case] input: &str) {
        assert!(matches!(
            input.parse::<MenuPath>(),
            Err(DomainError::InvalidPathSyntax(_))
        ));
    }

    #[test]
    fn test_display_is_digit_string() {
        let path = MenuPath::new(vec![3, 6, 2]).unwrap();
        assert_eq!(path.to_string(), "362");
        assert_eq!(path.child(1).unwrap().to_string(), "3621");
    }
}
