//! Server-dependent settings for the roster tracker

use crate::casemap::CaseMapping;
use crate::privilege::Privilege;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use thiserror::Error;

use std::{fs::File, io::Read, path::Path, path::PathBuf, str::FromStr};

/// Errors that could happen when loading or processing a config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error on {1}: {0}")]
    IoError(std::io::Error, PathBuf),
    #[error("JSON parse error in {1}: {0}")]
    JsonError(json5::Error, PathBuf),
    #[error("Malformed PREFIX token {0:?}")]
    PrefixFormat(String),
}

/// One entry in the PREFIX table: which mode letter grants a privilege, and
/// which symbol marks it in a NAMES reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixMode {
    pub privilege: Privilege,
    pub mode: char,
    pub symbol: char,
}

/// Configuration for a [`Roster`](crate::roster::Roster).
///
/// The defaults describe a typical modern network. A dispatcher that sees
/// ISUPPORT tokens from the server should feed them to [`RosterConfig::apply_isupport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub prefixes: Vec<PrefixMode>,
    pub chantypes: String,
    pub casemapping: CaseMapping,
    /// Strip every leading prefix symbol from NAMES entries, rather than only
    /// the first. Enable when the `multi-prefix` capability is negotiated.
    pub multi_prefix: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            prefixes: Privilege::iter()
                .rev()
                .map(|privilege| PrefixMode {
                    privilege,
                    mode: privilege.default_mode_letter(),
                    symbol: privilege.default_symbol(),
                })
                .collect(),
            chantypes: "#&".to_string(),
            casemapping: CaseMapping::default(),
            multi_prefix: false,
        }
    }
}

impl RosterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON5 file
    pub fn load_file<P: AsRef<Path>>(filename: P) -> Result<Self, ConfigError> {
        let path = filename.as_ref();
        let mut file = File::open(path).map_err(|e| ConfigError::IoError(e, path.to_owned()))?;
        let mut config = String::new();
        file.read_to_string(&mut config)
            .map_err(|e| ConfigError::IoError(e, path.to_owned()))?;
        json5::from_str(&config).map_err(|e| ConfigError::JsonError(e, path.to_owned()))
    }

    pub fn privilege_for_mode(&self, mode: char) -> Option<Privilege> {
        self.prefixes.iter().find(|p| p.mode == mode).map(|p| p.privilege)
    }

    pub fn privilege_for_symbol(&self, symbol: char) -> Option<Privilege> {
        self.prefixes.iter().find(|p| p.symbol == symbol).map(|p| p.privilege)
    }

    pub fn symbol_for(&self, privilege: Privilege) -> Option<char> {
        self.prefixes.iter().find(|p| p.privilege == privilege).map(|p| p.symbol)
    }

    pub fn is_channel_name(&self, target: &str) -> bool {
        target.chars().next().map_or(false, |c| self.chantypes.contains(c))
    }

    /// Update from one ISUPPORT (005) token. Tokens that don't affect the
    /// roster are ignored.
    pub fn apply_isupport(&mut self, key: &str, value: Option<&str>) -> Result<(), ConfigError> {
        match (key, value) {
            ("PREFIX", Some(value)) => self.apply_isupport_prefix(value),
            ("CHANTYPES", Some(value)) => {
                self.chantypes = value.to_string();
                Ok(())
            }
            ("CASEMAPPING", Some(value)) => {
                match CaseMapping::from_str(value) {
                    Ok(casemapping) => self.casemapping = casemapping,
                    Err(_) => tracing::warn!("Unsupported casemapping {}, keeping {}", value, self.casemapping),
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Rebuild the prefix table from a PREFIX value such as `(qaohv)~&@%+`.
    ///
    /// Letters are matched to privileges by their conventional mode letter,
    /// then by their conventional symbol. Pairs matching neither are skipped.
    pub fn apply_isupport_prefix(&mut self, value: &str) -> Result<(), ConfigError> {
        let malformed = || ConfigError::PrefixFormat(value.to_string());

        let (modes, symbols) = value
            .strip_prefix('(')
            .and_then(|rest| rest.split_once(')'))
            .ok_or_else(malformed)?;

        if modes.chars().count() != symbols.chars().count() {
            return Err(malformed());
        }

        let mut prefixes: Vec<PrefixMode> = Vec::new();
        for (mode, symbol) in modes.chars().zip(symbols.chars()) {
            let privilege = Privilege::iter()
                .find(|p| p.default_mode_letter() == mode)
                .or_else(|| Privilege::iter().find(|p| p.default_symbol() == symbol));

            match privilege {
                Some(privilege) if !prefixes.iter().any(|p| p.privilege == privilege) => {
                    prefixes.push(PrefixMode { privilege, mode, symbol });
                }
                _ => tracing::debug!("Ignoring unrecognised prefix mode {}{}", mode, symbol),
            }
        }

        self.prefixes = prefixes;
        Ok(())
    }
}
