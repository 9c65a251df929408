use std::fmt;

pub const DEFAULT_SMTP_PORT: u16 = 25;

/// Relay address taken from the `notif.smtp` setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpEndpoint {
    pub host: String,
    pub port: u16,
}

impl SmtpEndpoint {
    /// Splits `host[:port]` on the first colon. A missing or unparsable port
    /// falls back to [`DEFAULT_SMTP_PORT`].
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        match value.split_once(':') {
            Some((host, port)) => Self {
                host: host.to_string(),
                port: port.trim().parse().unwrap_or(DEFAULT_SMTP_PORT),
            },
            None => Self {
                host: value.to_string(),
                port: DEFAULT_SMTP_PORT,
            },
        }
    }
}

impl fmt::Display for SmtpEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_without_port_uses_default() {
        let ep = SmtpEndpoint::parse("mail.example.org");
        assert_eq!(ep.host, "mail.example.org");
        assert_eq!(ep.port, 25);
    }

    #[test]
    fn explicit_port() {
        let ep = SmtpEndpoint::parse("mail.example.org:2525");
        assert_eq!(ep.host, "mail.example.org");
        assert_eq!(ep.port, 2525);
    }

    #[test]
    fn bad_port_falls_back() {
        assert_eq!(SmtpEndpoint::parse("relay:smtp").port, 25);
        assert_eq!(SmtpEndpoint::parse("relay:").port, 25);
        assert_eq!(SmtpEndpoint::parse("relay:99999").port, 25);
    }

    #[test]
    fn display_joins_host_and_port() {
        assert_eq!(SmtpEndpoint::parse("relay").to_string(), "relay:25");
    }
}
