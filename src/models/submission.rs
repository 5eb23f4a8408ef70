use serde::{Deserialize, Serialize};

/// A stored intake record. Field order matches the on-disk JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: u64,
    pub organization: String,
    pub email: String,
    pub needs: String,
    /// Local time, `YYYY-MM-DDTHH:MM:SS.ffffff`.
    pub timestamp: String,
}

/// Validated, trimmed form fields awaiting an id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    pub organization: String,
    pub email: String,
    pub needs: String,
}

impl NewSubmission {
    pub fn into_submission(self, id: u64, timestamp: String) -> Submission {
        Submission {
            id,
            organization: self.organization,
            email: self.email,
            needs: self.needs,
            timestamp,
        }
    }
}
