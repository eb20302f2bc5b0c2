//! Categorical fields of a job record.
//!
//! The source sheet is free text and new values show up over time, so every
//! enum keeps an `Other` variant holding the trimmed value verbatim. Matching
//! is exact and case-sensitive on the trimmed label.

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EmployeeType {
    Artist,
    Qc,
    Other(String),
}

impl EmployeeType {
    pub fn from_label(s: &str) -> Self {
        match s.trim() {
            "Artist" => Self::Artist,
            "QC" => Self::Qc,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            EmployeeType::Artist => "Artist",
            EmployeeType::Qc => "QC",
            EmployeeType::Other(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Product {
    FloorplanQueue,
    MeasurementQueue,
    AutocadQueue,
    UrbanAngles,
    VanBreeMedia,
    Rework,
    Other(String),
}

impl Product {
    /// The enumerated products, in dashboard order.
    pub fn known() -> [Self; 6] {
        [
            Self::FloorplanQueue,
            Self::MeasurementQueue,
            Self::AutocadQueue,
            Self::Rework,
            Self::UrbanAngles,
            Self::VanBreeMedia,
        ]
    }

    pub fn from_label(s: &str) -> Self {
        match s.trim() {
            "Floorplan Queue" => Self::FloorplanQueue,
            "Measurement Queue" => Self::MeasurementQueue,
            "Autocad Queue" => Self::AutocadQueue,
            "Urban Angles" => Self::UrbanAngles,
            "Van Bree Media" => Self::VanBreeMedia,
            "Rework" => Self::Rework,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Product::FloorplanQueue => "Floorplan Queue",
            Product::MeasurementQueue => "Measurement Queue",
            Product::AutocadQueue => "Autocad Queue",
            Product::UrbanAngles => "Urban Angles",
            Product::VanBreeMedia => "Van Bree Media",
            Product::Rework => "Rework",
            Product::Other(s) => s,
        }
    }

    /// Short code used in table headers.
    pub fn code(&self) -> &str {
        match self {
            Product::FloorplanQueue => "FP",
            Product::MeasurementQueue => "MRP",
            Product::AutocadQueue => "CAD",
            Product::UrbanAngles => "UA",
            Product::VanBreeMedia => "VBM",
            Product::Rework => "RW",
            Product::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Product::Other(_))
    }

    /// Exact-match filter. Values outside the enumeration never match,
    /// not even themselves.
    pub fn matches(&self, other: &Product) -> bool {
        self.is_known() && self == other
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JobType {
    #[default]
    LiveJob,
    Rework,
    Other(String),
}

impl JobType {
    pub fn from_label(s: &str) -> Self {
        match s.trim() {
            "Live Job" => Self::LiveJob,
            "Rework" => Self::Rework,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            JobType::LiveJob => "Live Job",
            JobType::Rework => "Rework",
            JobType::Other(s) => s,
        }
    }

    /// Job type assumed when the source row leaves it blank.
    pub fn inferred_for(product: &Product) -> Self {
        if *product == Product::Rework {
            Self::Rework
        } else {
            Self::LiveJob
        }
    }
}

macro_rules! label_impls {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.label())
                }
            }
        )*
    };
}

label_impls!(EmployeeType, Product, JobType);
