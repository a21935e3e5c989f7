//! Membership type catalog
//!
//! Static reference data: the four membership tiers with their display
//! labels, descriptions, and prices. Not user-editable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Membership tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipType {
    Basic,
    Premium,
    Vip,
    Student,
}

/// Raised when a raw string does not name a catalog entry
#[derive(Debug, Clone, Error)]
#[error("unknown membership type: {0}")]
pub struct UnknownMembershipType(pub String);

impl MembershipType {
    /// All tiers, in catalog order (for form selects and breakdowns)
    pub const ALL: [MembershipType; 4] = [
        MembershipType::Basic,
        MembershipType::Premium,
        MembershipType::Vip,
        MembershipType::Student,
    ];

    /// Wire/storage value (matches the serde representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipType::Basic => "basic",
            MembershipType::Premium => "premium",
            MembershipType::Vip => "vip",
            MembershipType::Student => "student",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            MembershipType::Basic => "Basic Membership",
            MembershipType::Premium => "Premium Membership",
            MembershipType::Vip => "VIP Membership",
            MembershipType::Student => "Student Membership",
        }
    }

    /// Display description
    pub fn description(&self) -> &'static str {
        match self {
            MembershipType::Basic => "Access to gym equipment and basic facilities",
            MembershipType::Premium => "Full gym access plus group classes and locker",
            MembershipType::Vip => "All premium features plus personal training sessions",
            MembershipType::Student => "Discounted membership for students with valid ID",
        }
    }

    /// Display price
    pub fn price(&self) -> &'static str {
        match self {
            MembershipType::Basic => "$29/month",
            MembershipType::Premium => "$49/month",
            MembershipType::Vip => "$79/month",
            MembershipType::Student => "$19/month",
        }
    }
}

impl FromStr for MembershipType {
    type Err = UnknownMembershipType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(MembershipType::Basic),
            "premium" => Ok(MembershipType::Premium),
            "vip" => Ok(MembershipType::Vip),
            "student" => Ok(MembershipType::Student),
            other => Err(UnknownMembershipType(other.to_string())),
        }
    }
}

impl fmt::Display for MembershipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
