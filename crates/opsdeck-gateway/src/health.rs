// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
#[non_exhaustive]
pub enum ProbeStatus {
    Ok,
    Fail,
}

impl ProbeStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Fail => "FAIL",
        }
    }
}

impl Display for ProbeStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Joint result of the liveness/readiness probe pair. The probes settle
/// independently: one failing never flips the other's verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub healthz: ProbeStatus,
    pub readyz: ProbeStatus,
}

impl HealthReport {
    #[must_use]
    pub const fn all_ok(self) -> bool {
        matches!(self.healthz, ProbeStatus::Ok) && matches!(self.readyz, ProbeStatus::Ok)
    }
}
