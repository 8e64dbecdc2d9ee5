//! # Core Domain Entities
//!
//! Defines the three records the application tracks.
//!
//! ## Clusters
//!
//! - **Worker**: `User`, `VerificationStatus`
//! - **Job Board**: `ClientRequest`, `RequestStatus`, `RequestDecision`
//! - **Engagements**: `ActiveSession`, `SessionStatus`

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ParseStatusError;

/// Identifier of a signed-in worker (the managed backend's user id).
pub type UserId = String;

/// Identifier of a client request.
pub type RequestId = String;

/// Identifier of an active session.
pub type SessionId = String;

// =============================================================================
// CLUSTER A: THE WORKER
// =============================================================================

/// Verification status of a worker profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    /// Profile not yet complete; the worker cannot act on requests.
    #[default]
    Pending,
    /// Profile complete; the worker may accept and reject requests.
    Approved,
    /// Rejected by an administrator. Never produced locally.
    Rejected,
}

impl VerificationStatus {
    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerificationStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(ParseStatusError::new("verification", other)),
        }
    }
}

/// A worker profile as held by the application.
///
/// Empty strings and a zero `years_of_experience` mean "not provided".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend user id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub contact_number: String,
    /// Home address / service area.
    #[serde(default)]
    pub address: String,
    /// Years of professional experience.
    #[serde(default)]
    pub years_of_experience: u32,
    /// Free-text skill list (comma separated).
    #[serde(default)]
    pub skillset: String,
    /// Whether an identity-proof document was uploaded at sign-up.
    #[serde(default)]
    pub id_proof_uploaded: bool,
    /// Verification status.
    pub status: VerificationStatus,
    /// Derived: all six required profile fields are populated.
    pub profile_complete: bool,
}

impl User {
    /// A freshly signed-in worker with nothing but identity filled in.
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Whether the worker may act on client requests.
    pub fn is_approved(&self) -> bool {
        self.status == VerificationStatus::Approved
    }
}

// =============================================================================
// CLUSTER B: THE JOB BOARD
// =============================================================================

/// Lifecycle status of a client request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Awaiting a decision.
    #[default]
    Pending,
    /// Accepted by the worker (terminal).
    Accepted,
    /// Rejected by the worker (terminal).
    Rejected,
}

impl RequestStatus {
    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// `true` once a decision has been recorded.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            other => Err(ParseStatusError::new("request", other)),
        }
    }
}

/// The two decisions a worker can make on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestDecision {
    /// Take the job; creates an active session.
    Accept,
    /// Decline the job.
    Reject,
}

impl RequestDecision {
    /// Status the request ends up in.
    pub fn target_status(&self) -> RequestStatus {
        match self {
            Self::Accept => RequestStatus::Accepted,
            Self::Reject => RequestStatus::Rejected,
        }
    }
}

/// A job posted by a household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequest {
    /// Request id.
    pub id: RequestId,
    /// Name of the household contact.
    pub client_name: String,
    /// Neighbourhood.
    pub area: String,
    /// Number of rooms.
    pub rooms: u32,
    /// Requested services.
    pub tasks: Vec<String>,
    /// Free-text requirements.
    pub requirements: String,
    /// Offered payment in whole currency units.
    pub payment_offered: u64,
    /// Expected duration, e.g. "4 hours".
    pub duration: String,
    /// Day the request was posted.
    pub date_posted: NaiveDate,
    /// Lifecycle status.
    pub status: RequestStatus,
}

// =============================================================================
// CLUSTER C: ENGAGEMENTS
// =============================================================================

/// Lifecycle status of an active session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Work in progress.
    #[default]
    Ongoing,
    /// Finished. No operation produces this yet.
    Completed,
    /// Cancelled by the worker (terminal).
    Cancelled,
}

impl SessionStatus {
    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Capitalised label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ongoing" => Ok(Self::Ongoing),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(ParseStatusError::new("session", other)),
        }
    }
}

/// An accepted engagement between the worker and a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSession {
    /// Session id (derived from the acceptance timestamp).
    pub id: SessionId,
    /// Client the session is for.
    pub client_name: String,
    /// Acceptance day.
    pub start_date: NaiveDate,
    /// Planned end day.
    pub end_date: NaiveDate,
    /// Agreed payment.
    pub payment_amount: u64,
    /// Lifecycle status.
    pub status: SessionStatus,
}

impl ActiveSession {
    /// `true` while the session counts towards the ongoing limit.
    pub fn is_ongoing(&self) -> bool {
        self.status == SessionStatus::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_names() {
        for status in [
            RequestStatus::Pending,
            RequestStatus::Accepted,
            RequestStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<RequestStatus>().unwrap(), status);
        }
        assert!("done".parse::<SessionStatus>().is_err());
    }

    #[test]
    fn test_decision_target_status() {
        assert_eq!(RequestDecision::Accept.target_status(), RequestStatus::Accepted);
        assert_eq!(RequestDecision::Reject.target_status(), RequestStatus::Rejected);
    }

    #[test]
    fn test_request_terminal() {
        assert!(!RequestStatus::Pending.is_terminal());
        assert!(RequestStatus::Accepted.is_terminal());
        assert!(RequestStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_new_user_is_pending() {
        let user = User::new("u-1", "Ana", "ana@example.com");
        assert_eq!(user.status, VerificationStatus::Pending);
        assert!(!user.profile_complete);
        assert!(!user.is_approved());
    }

    #[test]
    fn test_request_json_shape() {
        let request = ClientRequest {
            id: "1".into(),
            client_name: "Sarah Johnson".into(),
            area: "Downtown".into(),
            rooms: 3,
            tasks: vec!["Cleaning".into()],
            requirements: "Deep clean".into(),
            payment_offered: 150,
            duration: "4 hours".into(),
            date_posted: NaiveDate::from_ymd_opt(2025, 1, 9).unwrap(),
            status: RequestStatus::Pending,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["clientName"], "Sarah Johnson");
        assert_eq!(json["paymentOffered"], 150);
        assert_eq!(json["datePosted"], "2025-01-09");
        assert_eq!(json["status"], "pending");
    }

    #[test]
    fn test_session_label() {
        assert_eq!(SessionStatus::Cancelled.label(), "Cancelled");
        assert_eq!(SessionStatus::Ongoing.to_string(), "ongoing");
    }
}
