use std::fmt;

/// `<repo>:<stratum>`; unique per configured replica pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetKey {
    pub repo: String,
    pub stratum: String,
}

impl TargetKey {
    pub fn new(repo: impl Into<String>, stratum: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            stratum: stratum.into(),
        }
    }
}

impl fmt::Display for TargetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.repo, self.stratum)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub key: TargetKey,
    pub url: String,
    pub contacts: Vec<String>,
}
