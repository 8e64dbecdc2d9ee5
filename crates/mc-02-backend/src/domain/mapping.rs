//! Profile record → local user.

use shared_types::{assess_profile, ProfileFields, User, VerificationStatus};

use super::records::{AuthUser, ProfileRecord};

/// Build the local user for a signed-in account.
///
/// Completeness is judged on the stored row, not on the fallbacks: a
/// worker whose row lacks `full_name` is incomplete even though a display
/// name is still found.
pub fn user_from_record(
    auth: &AuthUser,
    record: Option<&ProfileRecord>,
    typed_name: &str,
    typed_email: &str,
) -> User {
    fn text(field: Option<&String>) -> &str {
        field.map_or("", String::as_str)
    }

    let full_name = text(record.and_then(|r| r.full_name.as_ref()));
    let phone = text(record.and_then(|r| r.phone.as_ref()));
    let location = text(record.and_then(|r| r.location.as_ref()));
    let username = text(record.and_then(|r| r.username.as_ref()));
    let years = record.and_then(|r| r.experience_years).unwrap_or(0);
    let skillset = record
        .and_then(|r| r.skillset.as_ref())
        .map(|s| s.to_display())
        .unwrap_or_default();

    let assessment = assess_profile(
        ProfileFields {
            name: full_name,
            email: username,
            contact_number: phone,
            address: location,
            years_of_experience: years,
            skillset: &skillset,
        },
        VerificationStatus::Pending,
    );

    let name = [
        full_name,
        text(record.and_then(|r| r.name.as_ref())),
        typed_name,
        typed_email,
    ]
    .into_iter()
    .find(|candidate| !candidate.is_empty())
    .unwrap_or_default()
    .to_string();

    let email = if username.is_empty() {
        typed_email.to_string()
    } else {
        username.to_string()
    };

    User {
        id: auth.id.clone(),
        name,
        email,
        contact_number: phone.to_string(),
        address: location.to_string(),
        years_of_experience: years,
        skillset,
        id_proof_uploaded: record
            .and_then(|r| r.id_proof_url.as_deref())
            .is_some_and(|url| !url.is_empty()),
        status: assessment.status,
        profile_complete: assessment.profile_complete,
    }
}
