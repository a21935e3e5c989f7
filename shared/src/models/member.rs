//! Member Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MembershipType;
use crate::util::member_id;

/// Membership status (mutable after creation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Inactive => "inactive",
            MemberStatus::Suspended => "suspended",
        }
    }
}

/// Emergency contact sub-record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub relationship: String,
    pub phone: String,
}

/// Member entity
///
/// `id` and `join_date` are assigned at creation and never modified.
/// Every stored record passed the validation engine before it was added;
/// the store itself does not re-validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub membership_type: MembershipType,
    pub join_date: DateTime<Utc>,
    pub emergency_contact: EmergencyContact,
    pub status: MemberStatus,
}

impl Member {
    /// Merge a partial update, field-by-field. Unspecified fields are
    /// retained; `id` and `join_date` cannot be touched.
    pub fn apply(&mut self, update: MemberUpdate) {
        if let Some(v) = update.first_name {
            self.first_name = v;
        }
        if let Some(v) = update.last_name {
            self.last_name = v;
        }
        if let Some(v) = update.email {
            self.email = v;
        }
        if let Some(v) = update.phone {
            self.phone = v;
        }
        if let Some(v) = update.age {
            self.age = v;
        }
        if let Some(v) = update.membership_type {
            self.membership_type = v;
        }
        if let Some(v) = update.emergency_contact {
            self.emergency_contact = v;
        }
        if let Some(v) = update.status {
            self.status = v;
        }
    }
}

/// Raw emergency contact form input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContactDraft {
    pub name: String,
    pub relationship: String,
    pub phone: String,
}

/// Raw member form input
///
/// Every field is an untyped string exactly as collected from the form;
/// the validation engine is the conversion boundary into [`Member`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub membership_type: String,
    pub emergency_contact: EmergencyContactDraft,
}

impl MemberDraft {
    /// Convert a draft that already passed validation into a [`Member`],
    /// assigning a fresh id and the join timestamp. Text fields are
    /// trimmed; the new member starts `active`.
    ///
    /// Returns `None` when the numeric or enum fields do not parse, which
    /// a validated draft never hits.
    pub fn build(&self) -> Option<Member> {
        let age = self.age.trim().parse().ok()?;
        let membership_type = self.membership_type.parse().ok()?;
        Some(Member {
            id: member_id(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.clone(),
            age,
            membership_type,
            join_date: Utc::now(),
            emergency_contact: EmergencyContact {
                name: self.emergency_contact.name.trim().to_string(),
                relationship: self.emergency_contact.relationship.trim().to_string(),
                phone: self.emergency_contact.phone.clone(),
            },
            status: MemberStatus::Active,
        })
    }
}

/// Partial member update payload
///
/// `id` and `join_date` are immutable and have no corresponding field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub age: Option<u32>,
    pub membership_type: Option<MembershipType>,
    pub emergency_contact: Option<EmergencyContact>,
    pub status: Option<MemberStatus>,
}
