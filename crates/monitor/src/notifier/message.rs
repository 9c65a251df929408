use std::fmt;

use super::template::render;
use crate::alert::AlertContext;
use crate::config::NotificationTemplate;

/// A fully rendered alert, identical whether it is sent or only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
}

impl RenderedMessage {
    pub fn render(template: &NotificationTemplate, to: &[String], ctx: &AlertContext) -> Self {
        Self {
            from: template.from.clone(),
            to: to.to_vec(),
            subject: render(&template.subject, ctx),
            body: render(&template.body, ctx),
        }
    }
}

impl fmt::Display for RenderedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Subject: {}\nFrom: {}\nTo: {}\n\n{}",
            self.subject,
            self.from,
            self.to.join(", "),
            self.body
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SmtpEndpoint;

    #[test]
    fn renders_headers_then_body() {
        let template = NotificationTemplate {
            from: "mon@example.org".into(),
            subject: "%(repo)s:%(stratum_name)s out of sync".into(),
            body: "%(delta_rev)d revisions behind".into(),
            smtp: SmtpEndpoint::parse("mail.example.org"),
        };
        let ctx = AlertContext {
            repo: "lhcb.cern.ch".into(),
            stratum_name: "s1-fnal".into(),
            api_url: "http://s1-fnal/api".into(),
            delta_rev: 60,
            delta_time: 10,
            stratum0_mod: String::new(),
            stratum1_mod: String::new(),
            stratum0_rev: 160,
            stratum1_rev: 100,
        };
        let to = vec!["a@example.org".to_string(), "b@example.org".to_string()];

        let msg = RenderedMessage::render(&template, &to, &ctx);
        assert_eq!(
            msg.to_string(),
            "Subject: lhcb.cern.ch:s1-fnal out of sync\nFrom: mon@example.org\n\
             To: a@example.org, b@example.org\n\n60 revisions behind"
        );
    }
}
