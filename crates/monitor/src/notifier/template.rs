use crate::alert::AlertContext;

/// Substitutes `%(name)s`-style and `{name}`-style placeholders from `ctx`.
/// `%%` renders as `%`. Unknown names are left as written.
pub fn render(template: &str, ctx: &AlertContext) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(|c: char| c == '%' || c == '{') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match placeholder(tail, ctx) {
            Some((value, consumed)) => {
                out.push_str(&value);
                rest = &tail[consumed..];
            }
            None => {
                out.push_str(&tail[..1]);
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn placeholder(tail: &str, ctx: &AlertContext) -> Option<(String, usize)> {
    if tail.starts_with("%%") {
        return Some(("%".to_string(), 2));
    }
    if let Some(inner) = tail.strip_prefix("%(") {
        let close = inner.find(')')?;
        let conversion = inner[close + 1..].chars().next()?;
        if !matches!(conversion, 's' | 'd' | 'i' | 'r') {
            return None;
        }
        let value = ctx.lookup(&inner[..close])?;
        return Some((value, 2 + close + 1 + conversion.len_utf8()));
    }
    if let Some(inner) = tail.strip_prefix('{') {
        let close = inner.find('}')?;
        let value = ctx.lookup(&inner[..close])?;
        return Some((value, 1 + close + 1));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> AlertContext {
        AlertContext {
            repo: "atlas.cern.ch".into(),
            stratum_name: "s1-cern".into(),
            api_url: "http://s1/api".into(),
            delta_rev: 8900,
            delta_time: 42,
            stratum0_mod: "2024-03-01T12:00:00Z".into(),
            stratum1_mod: "2024-02-01T12:00:00Z".into(),
            stratum0_rev: 9000,
            stratum1_rev: 100,
        }
    }

    #[test]
    fn percent_style() {
        let out = render("%(repo)s:%(stratum_name)s is %(delta_rev)d revisions behind", &ctx());
        assert_eq!(out, "atlas.cern.ch:s1-cern is 8900 revisions behind");
    }

    #[test]
    fn brace_style() {
        let out = render("{repo} lags by {delta_time}s (see {api_url})", &ctx());
        assert_eq!(out, "atlas.cern.ch lags by 42s (see http://s1/api)");
    }

    #[test]
    fn unknown_and_literal_markers_kept() {
        assert_eq!(render("{nope} %(nope)s 100%% {", &ctx()), "{nope} %(nope)s 100% {");
        assert_eq!(render("50% done", &ctx()), "50% done");
        assert_eq!(render("%(repo)x", &ctx()), "%(repo)x");
    }

    #[test]
    fn unicode_passthrough() {
        assert_eq!(render("réplica {stratum_name} ✓", &ctx()), "réplica s1-cern ✓");
    }

    #[test]
    fn multiline_body() {
        let out = render("stratum0: %(stratum0_rev)d\nstratum1: %(stratum1_rev)d\n", &ctx());
        assert_eq!(out, "stratum0: 9000\nstratum1: 100\n");
    }
}
