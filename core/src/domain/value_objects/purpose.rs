//! Verification purpose value object.

use serde::{Deserialize, Serialize};

/// The sensitive action a verification code gates
///
/// The purpose only shapes the delivered message. Storage and matching
/// ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Purpose {
    /// Account registration
    Registration,
    /// Booking of a privileged meeting
    PrivilegedBooking,
}

impl Purpose {
    /// Wire representation of the purpose
    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::Registration => "registration",
            Purpose::PrivilegedBooking => "privileged-booking",
        }
    }
}

impl std::fmt::Display for Purpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Purpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "registration" => Ok(Purpose::Registration),
            "privileged-booking" | "privileged_booking" => Ok(Purpose::PrivilegedBooking),
            _ => Err(format!("Invalid verification purpose: {}", s)),
        }
    }
}
