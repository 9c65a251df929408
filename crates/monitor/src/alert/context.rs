use crate::alert::Evaluation;
use crate::monitor::Target;
use crate::status::StatusDocument;

/// Fields available to notification templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertContext {
    pub repo: String,
    pub stratum_name: String,
    pub api_url: String,
    pub delta_rev: i64,
    pub delta_time: i64,
    pub stratum0_mod: String,
    pub stratum1_mod: String,
    pub stratum0_rev: i64,
    pub stratum1_rev: i64,
}

impl AlertContext {
    pub fn new(target: &Target, doc: &StatusDocument, eval: &Evaluation) -> Self {
        Self {
            repo: target.key.repo.clone(),
            stratum_name: target.key.stratum.clone(),
            api_url: target.url.clone(),
            delta_rev: eval.rev_delta,
            delta_time: eval.time_delta,
            stratum0_mod: doc.stratum0.last_modified.clone(),
            stratum1_mod: doc.stratum1.last_modified.clone(),
            stratum0_rev: doc.stratum0.revision,
            stratum1_rev: doc.stratum1.revision,
        }
    }

    pub fn lookup(&self, name: &str) -> Option<String> {
        let value = match name {
            "repo" => self.repo.clone(),
            "stratum_name" => self.stratum_name.clone(),
            "api_url" => self.api_url.clone(),
            "delta_rev" => self.delta_rev.to_string(),
            "delta_time" => self.delta_time.to_string(),
            "stratum0_mod" => self.stratum0_mod.clone(),
            "stratum1_mod" => self.stratum1_mod.clone(),
            "stratum0_rev" => self.stratum0_rev.to_string(),
            "stratum1_rev" => self.stratum1_rev.to_string(),
            _ => return None,
        };
        Some(value)
    }
}
