//! # Profile Completeness
//!
//! The one rule deciding whether a worker profile is complete and what
//! verification status follows from it. Used by the lifecycle store when a
//! profile is edited and by the backend mapping when a record is loaded.

use serde::{Deserialize, Serialize};

use crate::entities::{User, VerificationStatus};

/// Borrowed view over the six fields the completeness rule looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileFields<'a> {
    /// Display name.
    pub name: &'a str,
    /// Login email.
    pub email: &'a str,
    /// Phone number.
    pub contact_number: &'a str,
    /// Address.
    pub address: &'a str,
    /// Years of experience; zero counts as missing.
    pub years_of_experience: u32,
    /// Skill list.
    pub skillset: &'a str,
}

impl<'a> From<&'a User> for ProfileFields<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            name: &user.name,
            email: &user.email,
            contact_number: &user.contact_number,
            address: &user.address,
            years_of_experience: user.years_of_experience,
            skillset: &user.skillset,
        }
    }
}

impl ProfileFields<'_> {
    /// All six required fields are populated.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.contact_number.is_empty()
            && !self.address.is_empty()
            && self.years_of_experience > 0
            && !self.skillset.is_empty()
    }
}

/// Result of [`assess_profile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileAssessment {
    /// Whether the profile is complete.
    pub profile_complete: bool,
    /// Status the profile should carry afterwards.
    pub status: VerificationStatus,
}

/// Derive completeness and status.
///
/// A complete profile is always `Approved`. An incomplete one keeps
/// `current`, so status never falls back to `Pending` on its own.
pub fn assess_profile(fields: ProfileFields<'_>, current: VerificationStatus) -> ProfileAssessment {
    let profile_complete = fields.is_complete();
    let status = if profile_complete {
        VerificationStatus::Approved
    } else {
        current
    };
    ProfileAssessment {
        profile_complete,
        status,
    }
}

/// Partial profile edit. `None` leaves the field untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    /// New address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// New experience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<u32>,
    /// New skill list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skillset: Option<String>,
}

impl ProfileUpdate {
    /// Merge into `user` and re-derive `profile_complete` and `status`.
    pub fn apply_to(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(contact_number) = self.contact_number {
            user.contact_number = contact_number;
        }
        if let Some(address) = self.address {
            user.address = address;
        }
        if let Some(years) = self.years_of_experience {
            user.years_of_experience = years;
        }
        if let Some(skillset) = self.skillset {
            user.skillset = skillset;
        }

        let assessment = assess_profile(ProfileFields::from(&*user), user.status);
        user.profile_complete = assessment.profile_complete;
        user.status = assessment.status;
    }

    /// `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn complete_fields() -> ProfileFields<'static> {
        ProfileFields {
            name: "Ana",
            email: "ana@example.com",
            contact_number: "555-0100",
            address: "12 Elm St",
            years_of_experience: 4,
            skillset: "Cleaning, Laundry",
        }
    }

    #[test]
    fn test_complete_profile_is_approved() {
        let result = assess_profile(complete_fields(), VerificationStatus::Pending);
        assert!(result.profile_complete);
        assert_eq!(result.status, VerificationStatus::Approved);
    }

    #[test]
    fn test_zero_experience_is_incomplete() {
        let fields = ProfileFields {
            years_of_experience: 0,
            ..complete_fields()
        };
        let result = assess_profile(fields, VerificationStatus::Pending);
        assert!(!result.profile_complete);
        assert_eq!(result.status, VerificationStatus::Pending);
    }

    #[test]
    fn test_incomplete_profile_keeps_approved_status() {
        let fields = ProfileFields {
            address: "",
            ..complete_fields()
        };
        let result = assess_profile(fields, VerificationStatus::Approved);
        assert!(!result.profile_complete);
        assert_eq!(result.status, VerificationStatus::Approved);
    }

    #[test]
    fn test_apply_update_merges_and_approves() {
        let mut user = User::new("u-1", "Ana", "ana@example.com");
        ProfileUpdate {
            contact_number: Some("555-0100".into()),
            address: Some("12 Elm St".into()),
            years_of_experience: Some(3),
            skillset: Some("Cleaning".into()),
            ..Default::default()
        }
        .apply_to(&mut user);

        assert_eq!(user.name, "Ana");
        assert!(user.profile_complete);
        assert_eq!(user.status, VerificationStatus::Approved);
    }

    #[test]
    fn test_apply_partial_update_stays_pending() {
        let mut user = User::new("u-1", "Ana", "ana@example.com");
        ProfileUpdate {
            address: Some("12 Elm St".into()),
            ..Default::default()
        }
        .apply_to(&mut user);

        assert!(!user.profile_complete);
        assert_eq!(user.status, VerificationStatus::Pending);
    }

    #[test]
    fn test_empty_update() {
        assert!(ProfileUpdate::default().is_empty());
        assert!(!ProfileUpdate {
            name: Some(String::new()),
            ..Default::default()
        }
        .is_empty());
    }

    proptest! {
        #[test]
        fn prop_complete_iff_all_fields_present(
            name in "[a-z]{0,3}",
            email in "[a-z]{0,3}",
            contact in "[0-9]{0,3}",
            address in "[a-z]{0,3}",
            years in 0u32..5,
            skills in "[a-z]{0,3}",
        ) {
            let fields = ProfileFields {
                name: &name,
                email: &email,
                contact_number: &contact,
                address: &address,
                years_of_experience: years,
                skillset: &skills,
            };
            let expected = !name.is_empty()
                && !email.is_empty()
                && !contact.is_empty()
                && !address.is_empty()
                && years > 0
                && !skills.is_empty();
            let result = assess_profile(fields, VerificationStatus::Pending);
            prop_assert_eq!(result.profile_complete, expected);
            prop_assert_eq!(result.status == VerificationStatus::Approved, expected);
        }

        #[test]
        fn prop_status_never_regresses(years in 0u32..3) {
            let fields = ProfileFields { years_of_experience: years, ..complete_fields() };
            let result = assess_profile(fields, VerificationStatus::Approved);
            prop_assert_eq!(result.status, VerificationStatus::Approved);
        }
    }
}
