use secrecy::{ExposeSecret, SecretString};

use crate::client::ApiClient;
use crate::flows::{FlowError, Route};
use crate::models::auth::{LoginRequest, SignupRequest, MIN_PASSWORD_LENGTH};
use crate::models::common::{require_email, require_non_empty};
use crate::models::{Gender, Position, User, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupStep {
    Credentials,
    Profile,
    Ready,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    pub nickname: String,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    pub height: Option<u16>,
    pub position: Option<Position>,
    pub play_style: Option<String>,
}

/// The multi-step signup form: credentials, then profile, then submit.
///
/// Submitting runs signup, login and a profile fetch in sequence. If a
/// later step fails the account created by an earlier one stays.
pub struct SignupFlow {
    step: SignupStep,
    email: String,
    password: Option<SecretString>,
    profile: ProfileDraft,
}

impl Default for SignupFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupFlow {
    pub fn new() -> Self {
        Self {
            step: SignupStep::Credentials,
            email: String::new(),
            password: None,
            profile: ProfileDraft::default(),
        }
    }

    pub fn step(&self) -> SignupStep {
        self.step
    }

    pub fn submit_credentials(
        &mut self,
        email: &str,
        password: SecretString,
        password_confirmation: SecretString,
    ) -> Result<(), ValidationError> {
        require_email("email", email)?;
        if password.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::new(
                "password",
                format!("must be at least {} characters", MIN_PASSWORD_LENGTH),
            ));
        }
        if password.expose_secret() != password_confirmation.expose_secret() {
            return Err(ValidationError::new("passwordConfirmation", "passwords do not match"));
        }
        self.email = email.trim().to_string();
        self.password = Some(password);
        self.step = SignupStep::Profile;
        Ok(())
    }

    pub fn submit_profile(&mut self, profile: ProfileDraft) -> Result<(), ValidationError> {
        if self.step == SignupStep::Credentials {
            return Err(ValidationError::new("step", "credentials come first"));
        }
        require_non_empty("nickname", &profile.nickname)?;
        self.profile = profile;
        self.step = SignupStep::Ready;
        Ok(())
    }

    /// Go back one step, keeping what was entered.
    pub fn back(&mut self) {
        self.step = match self.step {
            SignupStep::Credentials | SignupStep::Profile => SignupStep::Credentials,
            SignupStep::Ready => SignupStep::Profile,
        };
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn profile(&self) -> &ProfileDraft {
        &self.profile
    }

    /// Submit the form. It is left untouched so a failed attempt can be
    /// corrected and retried without re-entering anything.
    #[tracing::instrument(name = "Complete signup", skip(self, api), fields(email = %self.email))]
    pub async fn complete(&self, api: &ApiClient) -> Result<(User, Route), FlowError> {
        let password = match (self.step, &self.password) {
            (SignupStep::Ready, Some(password)) => password.clone(),
            _ => return Err(ValidationError::new("step", "signup form is incomplete").into()),
        };

        let request = SignupRequest {
            email: self.email.clone(),
            password: password.clone(),
            nickname: self.profile.nickname.clone(),
            gender: self.profile.gender,
            address: self.profile.address.clone(),
            height: self.profile.height,
            position: self.profile.position,
            play_style: self.profile.play_style.clone(),
        };
        let confirmation = api
            .auth()
            .signup(&request)
            .await
            .map_err(|e| FlowError::from_api(e, Route::Stay))?;
        tracing::info!("Signup accepted: {}", confirmation);

        login(api, LoginRequest { email: self.email.clone(), password }).await
    }
}

/// Log in and load the profile. Any failure falls back to the login page.
#[tracing::instrument(name = "Login flow", skip(api, request), fields(email = %request.email))]
pub async fn login(api: &ApiClient, request: LoginRequest) -> Result<(User, Route), FlowError> {
    api.auth()
        .login(&request)
        .await
        .map_err(|e| FlowError::new(e, Route::Login))?;
    let user = api
        .users()
        .me()
        .await
        .map_err(|e| FlowError::new(e, Route::Login))?;
    Ok((user, Route::Home))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.into())
    }

    #[test]
    fn steps_advance_in_order() {
        let mut flow = SignupFlow::new();
        assert_eq!(flow.step(), SignupStep::Credentials);

        let early = flow.submit_profile(ProfileDraft { nickname: "Rookie".into(), ..Default::default() });
        assert!(early.is_err());

        flow.submit_credentials("rookie@hoopmatch.dev", secret("password123"), secret("password123"))
            .unwrap();
        assert_eq!(flow.step(), SignupStep::Profile);

        flow.submit_profile(ProfileDraft { nickname: "Rookie".into(), ..Default::default() })
            .unwrap();
        assert_eq!(flow.step(), SignupStep::Ready);

        flow.back();
        assert_eq!(flow.step(), SignupStep::Profile);
    }

    #[test]
    fn mismatched_confirmation_keeps_first_step() {
        let mut flow = SignupFlow::new();
        let err = flow
            .submit_credentials("rookie@hoopmatch.dev", secret("password123"), secret("password124"))
            .unwrap_err();
        assert_eq!(err.field, "passwordConfirmation");
        assert_eq!(flow.step(), SignupStep::Credentials);
    }

    #[test]
    fn blank_nickname_is_rejected() {
        let mut flow = SignupFlow::new();
        flow.submit_credentials("rookie@hoopmatch.dev", secret("password123"), secret("password123"))
            .unwrap();
        let err = flow.submit_profile(ProfileDraft::default()).unwrap_err();
        assert_eq!(err.field, "nickname");
    }
}
