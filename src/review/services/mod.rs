//! Application services for module review orchestration.

mod defaults;
mod lifecycle;
mod requests;

pub use defaults::{DEFAULT_KERNEL_VERSION, ModuleDefaults};
pub use lifecycle::{ModuleLifecycleError, ModuleLifecycleResult, ModuleLifecycleService};
pub use requests::{
    CreateModuleRequest, RecordSaReviewRequest, RecordTriageQaRequest, UpdateModuleStatusRequest,
};
