//! Nickname and channel name comparison rules.

use serde::{Deserialize, Serialize};
use strum::EnumString;

/// The casemapping a server advertises through ISUPPORT `CASEMAPPING`.
///
/// Only the two mappings in common use are supported; `rfc1459` additionally
/// treats `[]\~` as the upper-case forms of `{}|^`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, strum::Display,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CaseMapping {
    Ascii,
    #[default]
    Rfc1459,
}

impl CaseMapping {
    pub fn fold_char(&self, c: char) -> char {
        match (self, c) {
            (Self::Rfc1459, '[') => '{',
            (Self::Rfc1459, ']') => '}',
            (Self::Rfc1459, '\\') => '|',
            (Self::Rfc1459, '~') => '^',
            _ => c.to_ascii_lowercase(),
        }
    }

    /// Fold a name to its canonical lower-case form.
    pub fn fold(&self, name: &str) -> String {
        name.chars().map(|c| self.fold_char(c)).collect()
    }

    /// Compare two names under this mapping.
    pub fn equals(&self, a: &str, b: &str) -> bool {
        a.len() == b.len() && a.chars().map(|c| self.fold_char(c)).eq(b.chars().map(|c| self.fold_char(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn rfc1459_folds_brackets() {
        assert!(CaseMapping::Rfc1459.equals("Foo[x]", "foo{X}"));
        assert!(!CaseMapping::Ascii.equals("Foo[x]", "foo{X}"));
        assert!(CaseMapping::Ascii.equals("Alice", "aLICE"));
    }

    #[test]
    fn parses_isupport_names() {
        assert_eq!(CaseMapping::from_str("ascii").unwrap(), CaseMapping::Ascii);
        assert_eq!(CaseMapping::from_str("rfc1459").unwrap(), CaseMapping::Rfc1459);
        assert!(CaseMapping::from_str("strict-rfc1459").is_err());
    }
}
