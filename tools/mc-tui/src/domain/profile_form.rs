//! Profile form buffers.

use mc_02_backend::{ProfileDraft, ProfileRecord, Skillset};
use shared_types::{ProfileFields, ProfileUpdate, User};

/// Form field, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    /// Full name
    Name,
    /// Email
    Email,
    /// Contact number
    ContactNumber,
    /// Years of experience
    YearsOfExperience,
    /// Address
    Address,
    /// Skills
    Skillset,
}

impl ProfileField {
    /// Fields in display order.
    pub const ALL: [ProfileField; 6] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::ContactNumber,
        ProfileField::YearsOfExperience,
        ProfileField::Address,
        ProfileField::Skillset,
    ];

    /// Label.
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Full Name",
            ProfileField::Email => "Email",
            ProfileField::ContactNumber => "Contact Number",
            ProfileField::YearsOfExperience => "Years of Experience",
            ProfileField::Address => "Address",
            ProfileField::Skillset => "Skillset",
        }
    }

    /// Placeholder shown while empty.
    pub fn placeholder(&self) -> &'static str {
        match self {
            ProfileField::Name => "Enter your full name",
            ProfileField::Email => "Enter your email",
            ProfileField::ContactNumber => "Enter your phone number",
            ProfileField::YearsOfExperience => "Years of experience",
            ProfileField::Address => "Enter your full address",
            ProfileField::Skillset => "e.g. house cleaning, laundry, cooking, organizing",
        }
    }
}

/// Longest experience entry accepted, in digits.
pub const EXPERIENCE_DIGITS: usize = 2;

/// Transient edit buffers for the profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileForm {
    /// Full name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Contact number.
    pub contact_number: String,
    /// Experience as typed.
    pub years_of_experience: String,
    /// Address.
    pub address: String,
    /// Skills.
    pub skillset: String,
    pub(crate) focus: usize,
}

impl ProfileForm {
    /// Buffers prefilled from the current user.
    pub fn from_user(user: Option<&User>) -> Self {
        let Some(user) = user else {
            return Self::default();
        };
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            contact_number: user.contact_number.clone(),
            years_of_experience: match user.years_of_experience {
                0 => String::new(),
                years => years.to_string(),
            },
            address: user.address.clone(),
            skillset: user.skillset.clone(),
            focus: 0,
        }
    }

    /// Focused field.
    pub fn focused(&self) -> ProfileField {
        ProfileField::ALL[self.focus]
    }

    /// Move focus down, wrapping.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % ProfileField::ALL.len();
    }

    /// Move focus up, wrapping.
    pub fn focus_prev(&mut self) {
        self.focus = self
            .focus
            .checked_sub(1)
            .unwrap_or(ProfileField::ALL.len() - 1);
    }

    /// Buffer of `field`.
    pub fn value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::ContactNumber => &self.contact_number,
            ProfileField::YearsOfExperience => &self.years_of_experience,
            ProfileField::Address => &self.address,
            ProfileField::Skillset => &self.skillset,
        }
    }

    fn value_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::ContactNumber => &mut self.contact_number,
            ProfileField::YearsOfExperience => &mut self.years_of_experience,
            ProfileField::Address => &mut self.address,
            ProfileField::Skillset => &mut self.skillset,
        }
    }

    /// Overlay the stored row. Blank columns keep the current buffer.
    pub fn fill_from_record(&mut self, record: &ProfileRecord) {
        let stored = [
            (ProfileField::Name, record.full_name.clone()),
            (ProfileField::Email, record.username.clone()),
            (ProfileField::ContactNumber, record.phone.clone()),
            (ProfileField::Address, record.location.clone()),
            (
                ProfileField::YearsOfExperience,
                record
                    .experience_years
                    .filter(|years| *years > 0)
                    .map(|years| years.to_string()),
            ),
            (
                ProfileField::Skillset,
                record.skillset.as_ref().map(Skillset::to_display),
            ),
        ];
        for (field, value) in stored {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                *self.value_mut(field) = value;
            }
        }
    }

    /// Type into the focused field. The experience field takes at most
    /// [`EXPERIENCE_DIGITS`] digits.
    pub fn insert(&mut self, c: char) {
        let field = self.focused();
        if field == ProfileField::YearsOfExperience
            && (!c.is_ascii_digit() || self.years_of_experience.len() >= EXPERIENCE_DIGITS)
        {
            return;
        }
        self.value_mut(field).push(c);
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        let field = self.focused();
        self.value_mut(field).pop();
    }

    /// Experience as a number; anything unparsable counts as zero.
    pub fn experience(&self) -> u32 {
        self.years_of_experience.trim().parse().unwrap_or(0)
    }

    /// Whether the submit control is enabled.
    pub fn is_valid(&self) -> bool {
        ProfileFields {
            name: &self.name,
            email: &self.email,
            contact_number: &self.contact_number,
            address: &self.address,
            years_of_experience: self.experience(),
            skillset: &self.skillset,
        }
        .is_complete()
    }

    /// Store update carrying every field.
    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            contact_number: Some(self.contact_number.clone()),
            address: Some(self.address.clone()),
            years_of_experience: Some(self.experience()),
            skillset: Some(self.skillset.clone()),
        }
    }

    /// Backend row for the same values.
    pub fn to_draft(&self) -> ProfileDraft {
        ProfileDraft {
            full_name: self.name.clone(),
            phone: self.contact_number.clone(),
            location: self.address.clone(),
            experience_years: self.experience(),
            skillset: Skillset::Text(self.skillset.clone()),
            username: self.email.clone(),
        }
    }
}
