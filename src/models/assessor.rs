use serde::{Deserialize, Serialize};

/// Authorization record for an identity allowed to submit component scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessor {
    pub authorized: bool,
    /// Successful score updates submitted by this identity. Monotonic while
    /// the record lives; authorization is a whole-record overwrite, so
    /// re-authorizing an identity starts the counter from zero again.
    pub assessments_count: u64,
}

impl Assessor {
    pub fn authorized() -> Self {
        Self {
            authorized: true,
            assessments_count: 0,
        }
    }
}
