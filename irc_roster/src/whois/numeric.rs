use super::WhoisFragment;

use serde::{Deserialize, Serialize};

/// The numeric replies that make up a WHOIS response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum WhoisNumeric {
    Away = 301,
    WhoisRegNick = 307,
    WhoisHelpOp = 310,
    WhoisUser = 311,
    WhoisServer = 312,
    WhoisOperator = 313,
    WhoisIdle = 317,
    EndOfWhois = 318,
    WhoisChannels = 319,
    WhoisSpecial = 320,
    WhoisAccount = 330,
    WhoisActually = 338,
    WhoisHost = 378,
    WhoisModes = 379,
    WhoisSecure = 671,
}

impl WhoisNumeric {
    pub fn from_code(code: u16) -> Option<Self> {
        Some(match code {
            301 => Self::Away,
            307 => Self::WhoisRegNick,
            310 => Self::WhoisHelpOp,
            311 => Self::WhoisUser,
            312 => Self::WhoisServer,
            313 => Self::WhoisOperator,
            317 => Self::WhoisIdle,
            318 => Self::EndOfWhois,
            319 => Self::WhoisChannels,
            320 => Self::WhoisSpecial,
            330 => Self::WhoisAccount,
            338 => Self::WhoisActually,
            378 => Self::WhoisHost,
            379 => Self::WhoisModes,
            671 => Self::WhoisSecure,
            _ => return None,
        })
    }

    pub fn code(&self) -> u16 {
        *self as u16
    }
}

/// One WHOIS numeric, sorted into the call it maps to on the
/// [`WhoisAggregator`](super::WhoisAggregator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhoisReply {
    Begin {
        target: String,
        user: String,
        host: String,
        realname: String,
    },
    Fragment {
        target: String,
        fragment: WhoisFragment,
    },
    End {
        target: String,
    },
}

impl WhoisReply {
    /// Interpret a numeric's parameters.
    ///
    /// `params` is the full parameter list including the trailing parameter;
    /// the first is the client's own nick and the second the WHOIS target.
    /// Returns `None` for other numerics, or if the parameters are too short
    /// or malformed to make sense of.
    pub fn parse<S: AsRef<str>>(numeric: WhoisNumeric, params: &[S]) -> Option<Self> {
        let param = |n: usize| params.get(n).map(|p| p.as_ref());
        let target = param(1)?.to_string();
        // Free-text numerics put their text in the last parameter
        let text = || params.last().map(|p| p.as_ref().to_string()).unwrap_or_default();

        let fragment = match numeric {
            WhoisNumeric::WhoisUser => {
                return Some(Self::Begin {
                    target,
                    user: param(2)?.to_string(),
                    host: param(3)?.to_string(),
                    realname: param(5).unwrap_or_default().to_string(),
                });
            }
            WhoisNumeric::EndOfWhois => return Some(Self::End { target }),

            WhoisNumeric::WhoisServer => WhoisFragment::Server {
                name: param(2)?.to_string(),
                info: param(3).unwrap_or_default().to_string(),
            },
            WhoisNumeric::WhoisOperator => WhoisFragment::Operator,
            WhoisNumeric::WhoisIdle => WhoisFragment::Idle {
                seconds: param(2)?.parse().ok()?,
                signon: param(3).and_then(|s| s.parse().ok()),
            },
            WhoisNumeric::WhoisChannels => {
                WhoisFragment::Channels(param(2)?.split_whitespace().map(str::to_string).collect())
            }
            WhoisNumeric::Away => WhoisFragment::Away(param(2).unwrap_or_default().to_string()),
            WhoisNumeric::WhoisAccount => WhoisFragment::LoggedIn(param(2)?.to_string()),
            WhoisNumeric::WhoisActually => {
                // Either `<host> :text`, `<user@host> <ip> :text`, or just `:text`
                let middle = &params[2.min(params.len())..params.len().saturating_sub(1).max(2)];
                if middle.is_empty() {
                    WhoisFragment::ActuallyHost(text())
                } else {
                    let hosts: Vec<&str> = middle.iter().map(|p| p.as_ref()).collect();
                    WhoisFragment::ActuallyHost(hosts.join(" "))
                }
            }
            WhoisNumeric::WhoisSecure => WhoisFragment::Secure(text()),
            WhoisNumeric::WhoisHost => WhoisFragment::Host(text()),
            WhoisNumeric::WhoisModes => WhoisFragment::Modes(text()),
            WhoisNumeric::WhoisSpecial => WhoisFragment::Special(text()),
            WhoisNumeric::WhoisRegNick => WhoisFragment::Registered,
            WhoisNumeric::WhoisHelpOp => WhoisFragment::HelpOp,
        };

        Some(Self::Fragment { target, fragment })
    }

    /// Convenience for dispatchers that have the raw numeric code
    pub fn parse_code<S: AsRef<str>>(code: u16, params: &[S]) -> Option<Self> {
        Self::parse(WhoisNumeric::from_code(code)?, params)
    }

    pub fn target(&self) -> &str {
        match self {
            Self::Begin { target, .. } | Self::Fragment { target, .. } | Self::End { target } => target,
        }
    }
}
