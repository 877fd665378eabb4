use serde::{Deserialize, Serialize};

/// Outcome of evaluating one product pair.
///
/// The engine only emits `Compatible` and `Conflict`. `Caution` is reserved
/// for graded rules; `Unknown` marks pairs that were never evaluated (e.g. a
/// product against itself in a matrix view).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompatibilityStatus {
    Compatible,
    Conflict,
    Caution,
    Unknown,
}

impl CompatibilityStatus {
    pub fn is_conflict(self) -> bool {
        self == CompatibilityStatus::Conflict
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CompatibilityStatus::Compatible => "COMPATIBLE",
            CompatibilityStatus::Conflict => "CONFLICT",
            CompatibilityStatus::Caution => "CAUTION",
            CompatibilityStatus::Unknown => "UNKNOWN",
        }
    }
}

impl core::fmt::Display for CompatibilityStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_upper_case() {
        let json = serde_json::to_string(&CompatibilityStatus::Conflict).unwrap();
        assert_eq!(json, "\"CONFLICT\"");
        assert_eq!(CompatibilityStatus::Compatible.to_string(), "COMPATIBLE");
    }
}
