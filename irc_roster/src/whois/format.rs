use super::WhoisSnapshot;

use chrono::{DateTime, Utc};

use std::fmt;

/// Render an idle time like `1d 2h 0m 5s`, leaving off leading zero units.
fn format_idle(seconds: u64) -> String {
    let units = [(86400, "d"), (3600, "h"), (60, "m"), (1, "s")];
    let mut remaining = seconds;
    let mut parts = Vec::new();

    for (size, suffix) in units {
        let count = remaining / size;
        remaining %= size;
        if count > 0 || !parts.is_empty() || size == 1 {
            parts.push(format!("{}{}", count, suffix));
        }
    }
    parts.join(" ")
}

fn format_signon(timestamp: i64) -> String {
    match DateTime::<Utc>::from_timestamp(timestamp, 0) {
        Some(time) => time.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => timestamp.to_string(),
    }
}

impl WhoisSnapshot {
    /// The snapshot as the lines a client would show, most important first.
    pub fn lines(&self) -> Vec<String> {
        let nick = &self.target;
        let mut lines = vec![format!("{} ({}@{}): {}", nick, self.user, self.host, self.realname)];

        if let Some(account) = &self.account {
            lines.push(format!("{} is logged in as {}", nick, account));
        }
        if self.away {
            match self.away_message.as_deref().filter(|m| !m.is_empty()) {
                Some(message) => lines.push(format!("{} is away: {}", nick, message)),
                None => lines.push(format!("{} is away", nick)),
            }
        }
        if !self.channels.is_empty() {
            lines.push(format!("{} is on {}", nick, self.channels.join(" ")));
        }
        if let Some(server) = &self.server {
            match self.server_info.as_deref().filter(|i| !i.is_empty()) {
                Some(info) => lines.push(format!("{} is connected to {} ({})", nick, server, info)),
                None => lines.push(format!("{} is connected to {}", nick, server)),
            }
        }
        if self.operator {
            lines.push(format!("{} is an IRC operator", nick));
        }
        if self.registered {
            lines.push(format!("{} has identified for this nick", nick));
        }
        if self.help_op {
            lines.push(format!("{} is available for help", nick));
        }
        if let Some(host) = &self.actual_host {
            lines.push(format!("{} is actually using host {}", nick, host));
        }
        for text in [&self.host_info, &self.modes, &self.secure].into_iter().flatten() {
            lines.push(format!("{} {}", nick, text));
        }
        for text in &self.special {
            lines.push(format!("{} {}", nick, text));
        }
        if let Some(idle) = self.idle_seconds {
            match self.signon {
                Some(signon) => lines.push(format!(
                    "{} has been idle {}, signed on {}",
                    nick,
                    format_idle(idle),
                    format_signon(signon)
                )),
                None => lines.push(format!("{} has been idle {}", nick, format_idle(idle))),
            }
        }

        lines
    }
}

impl fmt::Display for WhoisSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}
