//! Sign-in / sign-up form buffers.

use std::path::PathBuf;

use mc_02_backend::Credentials;

/// Which flow the auth screen submits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Existing account.
    #[default]
    SignIn,
    /// New account with an identity-proof document.
    SignUp,
}

/// Auth form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    /// Full name (sign-up only)
    Name,
    /// Email
    Email,
    /// Password
    Password,
    /// Path to the identity-proof file (sign-up only)
    IdProof,
}

impl AuthField {
    /// Label.
    pub fn label(&self) -> &'static str {
        match self {
            AuthField::Name => "Full Name",
            AuthField::Email => "Email",
            AuthField::Password => "Password",
            AuthField::IdProof => "ID Proof (file path)",
        }
    }
}

const SIGN_IN_FIELDS: &[AuthField] = &[AuthField::Email, AuthField::Password];
const SIGN_UP_FIELDS: &[AuthField] = &[
    AuthField::Name,
    AuthField::Email,
    AuthField::Password,
    AuthField::IdProof,
];

/// What the auth screen asks the backend to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    /// Sign in.
    SignIn(Credentials),
    /// Sign up. The document is read from disk before submitting.
    SignUp {
        /// Typed credentials.
        credentials: Credentials,
        /// Identity-proof path, if one was given.
        id_proof: Option<PathBuf>,
    },
}

/// Transient buffers of the auth screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthForm {
    /// Current flow.
    pub mode: AuthMode,
    /// Full name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Password.
    pub password: String,
    /// Identity-proof path.
    pub id_proof: String,
    focus: usize,
}

impl AuthForm {
    /// Fields shown in the current mode.
    pub fn fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::SignIn => SIGN_IN_FIELDS,
            AuthMode::SignUp => SIGN_UP_FIELDS,
        }
    }

    /// Focused field.
    pub fn focused(&self) -> AuthField {
        let fields = self.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    /// Switch between sign-in and sign-up, keeping typed email / password.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
        self.focus = 0;
    }

    /// Move focus down, wrapping.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields().len();
    }

    /// Move focus up, wrapping.
    pub fn focus_prev(&mut self) {
        let len = self.fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    /// Buffer of `field`.
    pub fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::Name => &self.name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
            AuthField::IdProof => &self.id_proof,
        }
    }

    fn value_mut(&mut self, field: AuthField) -> &mut String {
        match field {
            AuthField::Name => &mut self.name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
            AuthField::IdProof => &mut self.id_proof,
        }
    }

    /// Type into the focused field.
    pub fn insert(&mut self, c: char) {
        let field = self.focused();
        self.value_mut(field).push(c);
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        let field = self.focused();
        self.value_mut(field).pop();
    }

    /// Email and password present (plus name when signing up).
    pub fn is_ready(&self) -> bool {
        let base = !self.email.is_empty() && !self.password.is_empty();
        match self.mode {
            AuthMode::SignIn => base,
            AuthMode::SignUp => base && !self.name.is_empty(),
        }
    }

    fn credentials(&self) -> Credentials {
        Credentials {
            name: self.name.clone(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }

    /// Request for the current mode. The identity-proof check is left to
    /// the account service so its message is the one shown.
    pub fn request(&self) -> AuthRequest {
        match self.mode {
            AuthMode::SignIn => AuthRequest::SignIn(self.credentials()),
            AuthMode::SignUp => AuthRequest::SignUp {
                credentials: self.credentials(),
                id_proof: match self.id_proof.trim() {
                    "" => None,
                    path => Some(PathBuf::from(path)),
                },
            },
        }
    }

    /// Forget the password after a submit.
    pub fn clear_secret(&mut self) {
        self.password.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_has_two_fields() {
        let form = AuthForm::default();
        assert_eq!(form.fields(), SIGN_IN_FIELDS);
        assert_eq!(form.focused(), AuthField::Email);
    }

    #[test]
    fn test_toggle_resets_focus_and_keeps_values() {
        let mut form = AuthForm::default();
        form.insert('a');
        form.focus_next();
        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::SignUp);
        assert_eq!(form.focused(), AuthField::Name);
        assert_eq!(form.email, "a");
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = AuthForm::default();
        form.focus_prev();
        assert_eq!(form.focused(), AuthField::Password);
        form.focus_next();
        assert_eq!(form.focused(), AuthField::Email);
    }

    #[test]
    fn test_sign_up_request_without_document() {
        let form = AuthForm {
            mode: AuthMode::SignUp,
            name: "Ana".into(),
            email: " ana@example.com ".into(),
            password: "pw".into(),
            ..Default::default()
        };
        assert!(form.is_ready());
        match form.request() {
            AuthRequest::SignUp {
                credentials,
                id_proof,
            } => {
                assert_eq!(credentials.email, "ana@example.com");
                assert!(id_proof.is_none());
            }
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[test]
    fn test_sign_in_not_ready_without_password() {
        let form = AuthForm {
            email: "ana@example.com".into(),
            ..Default::default()
        };
        assert!(!form.is_ready());
    }
}
