//! Business services containing domain logic and use cases.

pub mod clock;
pub mod sweep;
pub mod verification;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use sweep::{SweepHandle, SweepResult, SweepScheduler};
pub use verification::{
    generate_secure_code, CodeDeliveryTrait, CodeStore, RequestCodeResult, VerificationService,
    VerificationServiceConfig, VerifyCodeResult,
};
