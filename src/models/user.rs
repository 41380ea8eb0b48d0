use std::fmt;
use serde::{Deserialize, Serialize};

use crate::models::common::{require_email, require_non_empty, Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// The five basketball positions, numbered 1 to 5 in the order a
/// lineup card lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "PG")]
    PointGuard,
    #[serde(rename = "SG")]
    ShootingGuard,
    #[serde(rename = "SF")]
    SmallForward,
    #[serde(rename = "PF")]
    PowerForward,
    #[serde(rename = "C")]
    Center,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::PointGuard,
        Position::ShootingGuard,
        Position::SmallForward,
        Position::PowerForward,
        Position::Center,
    ];

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Position::PointGuard),
            2 => Some(Position::ShootingGuard),
            3 => Some(Position::SmallForward),
            4 => Some(Position::PowerForward),
            5 => Some(Position::Center),
            _ => None,
        }
    }

    pub fn id(self) -> u8 {
        match self {
            Position::PointGuard => 1,
            Position::ShootingGuard => 2,
            Position::SmallForward => 3,
            Position::PowerForward => 4,
            Position::Center => 5,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::SmallForward => "SF",
            Position::PowerForward => "PF",
            Position::Center => "C",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub height: Option<u16>,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub play_style: Option<String>,
    #[serde(default)]
    pub status_message: Option<String>,
}

impl Validate for User {
    fn validate(&self) -> Result<(), ValidationError> {
        require_email("email", &self.email)?;
        require_non_empty("nickname", &self.nickname)
    }
}

/// Partial profile update; absent fields stay as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
}

impl UpdateProfileRequest {
    pub fn apply_to(&self, user: &mut User) {
        if let Some(nickname) = &self.nickname {
            user.nickname = nickname.clone();
        }
        if self.gender.is_some() {
            user.gender = self.gender;
        }
        if let Some(address) = &self.address {
            user.address = Some(address.clone());
        }
        if self.height.is_some() {
            user.height = self.height;
        }
        if self.position.is_some() {
            user.position = self.position;
        }
        if let Some(play_style) = &self.play_style {
            user.play_style = Some(play_style.clone());
        }
        if let Some(status_message) = &self.status_message {
            user.status_message = Some(status_message.clone());
        }
    }
}

impl Validate for UpdateProfileRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(nickname) = &self.nickname {
            require_non_empty("nickname", nickname)?;
        }
        if let Some(height) = self.height {
            if !(100..=250).contains(&height) {
                return Err(ValidationError::new("height", format!("{} cm is out of range", height)));
            }
        }
        Ok(())
    }
}
