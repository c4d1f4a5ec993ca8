use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Clinical domain a calculator belongs to. Closed set — adding a
/// domain is a deliberate schema change, not a runtime event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    Urology,
    Oncology,
    Nephrology,
    Cardiology,
    Pulmonology,
    General,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Urology => "Urology",
            Category::Oncology => "Oncology",
            Category::Nephrology => "Nephrology",
            Category::Cardiology => "Cardiology",
            Category::Pulmonology => "Pulmonology",
            Category::General => "General",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
