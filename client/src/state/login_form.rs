//! Transient state of the login page (tabs, fields, loading, error).
//!
//! DESIGN
//! ======
//! Fields are independent; the only derived rule is that the login button
//! is disabled while loading or while either credential field is empty.
//! Field formats are left to the browser's `required`/`type` attributes.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use crate::net::types::Credentials;

/// Which form the login card shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Signup,
}

/// Guest category picked on the signup form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuestType {
    #[default]
    TalentRelative,
    Vip,
    Sponsor,
    StaffBasketball,
    StaffSpectacle,
    StaffFashion,
    StaffFacilities,
    StaffPhotoVideo,
    StaffPressMedia,
}

impl GuestType {
    /// All options in display order.
    pub const ALL: [Self; 9] = [
        Self::TalentRelative,
        Self::Vip,
        Self::Sponsor,
        Self::StaffBasketball,
        Self::StaffSpectacle,
        Self::StaffFashion,
        Self::StaffFacilities,
        Self::StaffPhotoVideo,
        Self::StaffPressMedia,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TalentRelative => "Talent Relative",
            Self::Vip => "VIP",
            Self::Sponsor => "Sponsor",
            Self::StaffBasketball => "Staff - Basketball",
            Self::StaffSpectacle => "Staff - Spectacle",
            Self::StaffFashion => "Staff - Fashion",
            Self::StaffFacilities => "Staff - Facilities",
            Self::StaffPhotoVideo => "Staff - Photographer/video",
            Self::StaffPressMedia => "Staff - Press/Media",
        }
    }

    /// Inverse of [`GuestType::as_str`].
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == raw)
    }
}

/// Signup fields. There is no signup endpoint yet, so these are only held.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub surname: String,
    pub email: String,
    pub guest_type: GuestType,
}

/// Login page state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub tab: AuthTab,
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub loading: bool,
    pub error: String,
    pub signup: SignupForm,
}

impl LoginFormState {
    /// Whether the login submit button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.email.is_empty() && !self.password.is_empty()
    }

    /// HTML `type` for the password input.
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }

    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Clear the previous error and enter the loading state.
    pub fn begin_attempt(&mut self) {
        self.error.clear();
        self.loading = true;
    }

    /// Leave the loading state, keeping the error message on failure.
    pub fn finish_attempt<T>(&mut self, outcome: &Result<T, String>) {
        self.loading = false;
        if let Err(message) = outcome {
            self.error.clone_from(message);
        }
    }

    /// Credentials as typed; no trimming or validation.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }
}

/// A test account advertised on the login card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestAccount {
    pub label: &'static str,
    pub email: &'static str,
    pub password: &'static str,
}

pub const TEST_ACCOUNTS: [TestAccount; 3] = [
    TestAccount { label: "Staff", email: "staff@eternelles.com", password: "staff123" },
    TestAccount { label: "Talent", email: "talent@eternelles.com", password: "talent123" },
    TestAccount { label: "Guest", email: "guest@eternelles.com", password: "guest123" },
];
