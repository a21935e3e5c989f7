//! Collection queries: list filtering and dashboard statistics

use shared::models::{Member, MemberStatus, MembershipType};

/// List filter; all criteria are optional and conjunctive.
#[derive(Debug, Clone, Default)]
pub struct MemberFilter {
    /// Case-insensitive substring match on first name, last name, or email
    pub search: Option<String>,
    pub status: Option<MemberStatus>,
    pub membership_type: Option<MembershipType>,
}

impl MemberFilter {
    pub fn matches(&self, member: &Member) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let hit = member.first_name.to_lowercase().contains(&term)
                || member.last_name.to_lowercase().contains(&term)
                || member.email.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }
        if let Some(status) = self.status
            && member.status != status
        {
            return false;
        }
        if let Some(membership_type) = self.membership_type
            && member.membership_type != membership_type
        {
            return false;
        }
        true
    }
}

/// Dashboard counters over the whole collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub suspended: usize,
    pub basic: usize,
    pub premium: usize,
    pub vip: usize,
    pub student: usize,
}

impl MemberStats {
    pub fn collect(members: &[Member]) -> Self {
        let mut stats = Self {
            total: members.len(),
            ..Self::default()
        };
        for member in members {
            match member.status {
                MemberStatus::Active => stats.active += 1,
                MemberStatus::Inactive => stats.inactive += 1,
                MemberStatus::Suspended => stats.suspended += 1,
            }
            match member.membership_type {
                MembershipType::Basic => stats.basic += 1,
                MembershipType::Premium => stats.premium += 1,
                MembershipType::Vip => stats.vip += 1,
                MembershipType::Student => stats.student += 1,
            }
        }
        stats
    }
}

/// The `n` most recently joined members, newest first.
pub fn recent_members(members: &[Member], n: usize) -> Vec<&Member> {
    let mut sorted: Vec<&Member> = members.iter().collect();
    sorted.sort_by(|a, b| b.join_date.cmp(&a.join_date));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use shared::models::{EmergencyContactDraft, MemberDraft};

    fn member(first: &str, email: &str, tier: &str) -> Member {
        MemberDraft {
            first_name: first.to_string(),
            last_name: "Doe".to_string(),
            email: email.to_string(),
            phone: "5551234567".to_string(),
            age: "30".to_string(),
            membership_type: tier.to_string(),
            emergency_contact: EmergencyContactDraft {
                name: "John Doe".to_string(),
                relationship: "Spouse".to_string(),
                phone: "5559876543".to_string(),
            },
        }
        .build()
        .unwrap()
    }

    #[test]
    fn test_search_matches_name_and_email() {
        let m = member("Jane", "jane@x.com", "basic");

        let by_first = MemberFilter {
            search: Some("JAN".to_string()),
            ..Default::default()
        };
        assert!(by_first.matches(&m));

        let by_last = MemberFilter {
            search: Some("doe".to_string()),
            ..Default::default()
        };
        assert!(by_last.matches(&m));

        let by_email = MemberFilter {
            search: Some("@x.com".to_string()),
            ..Default::default()
        };
        assert!(by_email.matches(&m));

        let miss = MemberFilter {
            search: Some("smith".to_string()),
            ..Default::default()
        };
        assert!(!miss.matches(&m));
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let mut m = member("Jane", "jane@x.com", "vip");
        m.status = MemberStatus::Suspended;

        let matching = MemberFilter {
            search: Some("jane".to_string()),
            status: Some(MemberStatus::Suspended),
            membership_type: Some(MembershipType::Vip),
        };
        assert!(matching.matches(&m));

        let wrong_status = MemberFilter {
            search: Some("jane".to_string()),
            status: Some(MemberStatus::Active),
            membership_type: Some(MembershipType::Vip),
        };
        assert!(!wrong_status.matches(&m));

        let wrong_tier = MemberFilter {
            membership_type: Some(MembershipType::Student),
            ..Default::default()
        };
        assert!(!wrong_tier.matches(&m));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let m = member("Jane", "jane@x.com", "basic");
        assert!(MemberFilter::default().matches(&m));
    }

    #[test]
    fn test_stats_breakdown() {
        let mut members = vec![
            member("A", "a@x.com", "basic"),
            member("B", "b@x.com", "basic"),
            member("C", "c@x.com", "premium"),
            member("D", "d@x.com", "vip"),
            member("E", "e@x.com", "student"),
        ];
        members[1].status = MemberStatus::Inactive;
        members[3].status = MemberStatus::Suspended;

        let stats = MemberStats::collect(&members);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.active, 3);
        assert_eq!(stats.inactive, 1);
        assert_eq!(stats.suspended, 1);
        assert_eq!(stats.basic, 2);
        assert_eq!(stats.premium, 1);
        assert_eq!(stats.vip, 1);
        assert_eq!(stats.student, 1);
    }

    #[test]
    fn test_stats_of_empty_collection() {
        assert_eq!(MemberStats::collect(&[]), MemberStats::default());
    }

    #[test]
    fn test_recent_members_newest_first() {
        let now = Utc::now();
        let mut a = member("Old", "old@x.com", "basic");
        a.join_date = now - Duration::days(30);
        let mut b = member("Mid", "mid@x.com", "basic");
        b.join_date = now - Duration::days(7);
        let mut c = member("New", "new@x.com", "basic");
        c.join_date = now;

        let members = vec![a, b, c];
        let recent = recent_members(&members, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].first_name, "New");
        assert_eq!(recent[1].first_name, "Mid");

        // Asking for more than exist returns the whole collection
        assert_eq!(recent_members(&members, 10).len(), 3);
    }
}
