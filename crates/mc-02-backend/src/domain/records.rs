//! # Backend Records
//!
//! Shapes exchanged with the managed backend. Field names follow the
//! backend's snake_case columns, not the local `User`.

use serde::{Deserialize, Serialize};

/// Authenticated account handle returned by sign-up / sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Backend user id (UUID string).
    pub id: String,
    /// Account email.
    #[serde(default)]
    pub email: String,
}

/// What the auth screen collects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    /// Name typed at sign-up; used as a display-name fallback.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Password.
    pub password: String,
}

/// Identity-proof document picked at sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdProofFile {
    /// Original file name (the extension is reused in storage).
    pub file_name: String,
    /// MIME type sent with the upload.
    pub content_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl IdProofFile {
    /// Text after the last `.`; the whole name if there is none.
    pub fn extension(&self) -> &str {
        self.file_name.rsplit('.').next().unwrap_or(&self.file_name)
    }
}

/// Object path of a worker's identity proof inside the bucket.
pub fn id_proof_path(user_id: &str, file: &IdProofFile) -> String {
    format!("idproofs/{}.{}", user_id, file.extension())
}

/// Skill list as stored: either an array or a single string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Skillset {
    /// Array column.
    List(Vec<String>),
    /// Free text.
    Text(String),
}

impl Default for Skillset {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl Skillset {
    /// Comma-separated rendering used by the local profile.
    pub fn to_display(&self) -> String {
        match self {
            Self::List(items) => items.join(", "),
            Self::Text(text) => text.clone(),
        }
    }
}

/// One row of the profile table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Owning account; the upsert conflict key.
    pub user_id: String,
    /// Full name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Legacy name column; read as a fallback, never written.
    #[serde(default, skip_serializing)]
    pub name: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Address / area.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Years of experience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
    /// Skills.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skillset: Option<Skillset>,
    /// Login email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Public URL of the uploaded identity proof.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_proof_url: Option<String>,
}

impl ProfileRecord {
    /// Row written right after sign-up: name and email known, rest blank.
    pub fn initial(user_id: &str, full_name: &str, email: &str, id_proof_url: String) -> Self {
        Self {
            user_id: user_id.to_string(),
            full_name: Some(full_name.to_string()),
            name: None,
            phone: Some(String::new()),
            location: Some(String::new()),
            experience_years: Some(0),
            skillset: Some(Skillset::default()),
            username: Some(email.to_string()),
            id_proof_url: Some(id_proof_url),
        }
    }

    /// Overlay every `Some` field of `other` onto `self`.
    pub fn merge(&mut self, other: ProfileRecord) {
        fn take<T>(slot: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *slot = value;
            }
        }
        take(&mut self.full_name, other.full_name);
        take(&mut self.name, other.name);
        take(&mut self.phone, other.phone);
        take(&mut self.location, other.location);
        take(&mut self.experience_years, other.experience_years);
        take(&mut self.skillset, other.skillset);
        take(&mut self.username, other.username);
        take(&mut self.id_proof_url, other.id_proof_url);
    }
}

/// Fields the profile form persists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    /// Full name.
    pub full_name: String,
    /// Phone number.
    pub phone: String,
    /// Address / area.
    pub location: String,
    /// Years of experience.
    pub experience_years: u32,
    /// Skills.
    pub skillset: Skillset,
    /// Login email.
    pub username: String,
}

impl ProfileDraft {
    /// Row to upsert for `user_id`.
    pub fn into_record(self, user_id: &str) -> ProfileRecord {
        ProfileRecord {
            user_id: user_id.to_string(),
            full_name: Some(self.full_name),
            name: None,
            phone: Some(self.phone),
            location: Some(self.location),
            experience_years: Some(self.experience_years),
            skillset: Some(self.skillset),
            username: Some(self.username),
            id_proof_url: None,
        }
    }
}

/// Outcome of a profile save, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSaveResult {
    /// Whether the row was written.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn file(name: &str) -> IdProofFile {
        IdProofFile {
            file_name: name.into(),
            content_type: "image/png".into(),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_id_proof_path_uses_extension() {
        assert_eq!(
            id_proof_path("abc", &file("passport.scan.png")),
            "idproofs/abc.png"
        );
        assert_eq!(id_proof_path("abc", &file("noext")), "idproofs/abc.noext");
    }

    #[test]
    fn test_skillset_accepts_both_shapes() {
        let list: Skillset = serde_json::from_value(json!(["Cleaning", "Cooking"])).unwrap();
        assert_eq!(list.to_display(), "Cleaning, Cooking");

        let text: Skillset = serde_json::from_value(json!("Ironing")).unwrap();
        assert_eq!(text.to_display(), "Ironing");
    }

    #[test]
    fn test_record_skips_legacy_name_on_write() {
        let record = ProfileRecord {
            user_id: "u".into(),
            name: Some("old".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({ "user_id": "u" }));
    }

    #[test]
    fn test_record_reads_sparse_row() {
        let record: ProfileRecord = serde_json::from_value(json!({
            "user_id": "u",
            "name": "Legacy",
            "experience_years": 3
        }))
        .unwrap();
        assert_eq!(record.name.as_deref(), Some("Legacy"));
        assert_eq!(record.experience_years, Some(3));
        assert!(record.phone.is_none());
    }

    #[test]
    fn test_initial_record() {
        let record = ProfileRecord::initial("u", "Ana", "ana@example.com", "https://x/y".into());
        assert_eq!(record.experience_years, Some(0));
        assert_eq!(record.skillset, Some(Skillset::List(vec![])));
        assert_eq!(record.username.as_deref(), Some("ana@example.com"));
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let mut base = ProfileRecord::initial("u", "Ana", "ana@example.com", "url".into());
        base.merge(ProfileRecord {
            user_id: "u".into(),
            phone: Some("555".into()),
            ..Default::default()
        });
        assert_eq!(base.phone.as_deref(), Some("555"));
        assert_eq!(base.full_name.as_deref(), Some("Ana"));
        assert_eq!(base.id_proof_url.as_deref(), Some("url"));
    }
}
