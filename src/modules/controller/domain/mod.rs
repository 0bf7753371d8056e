pub mod activity_log;
pub mod debug_snapshot;
pub mod system_status;

pub use activity_log::{ActivityLine, ActivityLog};
pub use debug_snapshot::DebugSnapshot;
pub use system_status::SystemStatus;
