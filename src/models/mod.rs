pub mod category;
pub mod dashboard;
pub mod group_summary;
pub mod job_record;

pub use category::{EmployeeType, JobType, Product};
pub use group_summary::{GroupKey, GroupSummary, ProductCounts};
pub use job_record::{JobRecord, WorkerDayKey};
