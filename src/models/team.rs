// src/models/team.rs
use serde::{Deserialize, Serialize};

use crate::models::common::{require_non_empty, Validate, ValidationError};
use crate::models::user::Position;

pub const MIN_TEAM_SIZE: u32 = 2;
pub const MAX_TEAM_SIZE: u32 = 15;
pub const MAX_TEAM_NAME_LENGTH: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Elite,
}

impl SkillLevel {
    pub fn tier(self) -> i32 {
        match self {
            SkillLevel::Beginner => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
            SkillLevel::Elite => 4,
        }
    }
}

/// Team playing style. Only selects which canned coaching text is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamDna {
    RunAndGun,
    Lockdown,
    TeamPlay,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub games_played: u32,
    pub reports_count: u32,
    pub active_days: u32,
}

/// A team as the client sees it.
///
/// The roster counts are private so `member_count <= max_members` holds for
/// every value, including ones decoded from the backend. `is_official` is
/// derived from them rather than stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TeamWire", into = "TeamWire")]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub short_name: Option<String>,
    member_count: u32,
    max_members: u32,
    pub skill_level: SkillLevel,
    pub region: String,
    pub stats: TeamStats,
    pub captain_id: i64,
    pub dna: Option<TeamDna>,
    pub level: Option<u32>,
    pub experience: Option<u32>,
}

impl Team {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        captain_id: i64,
        max_members: u32,
        skill_level: SkillLevel,
        region: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let team = Self {
            id,
            name: name.into(),
            short_name: None,
            member_count: 1,
            max_members,
            skill_level,
            region: region.into(),
            stats: TeamStats::default(),
            captain_id,
            dna: None,
            level: None,
            experience: None,
        };
        team.validate()?;
        Ok(team)
    }

    pub fn with_member_count(mut self, member_count: u32) -> Result<Self, ValidationError> {
        self.member_count = member_count;
        self.validate()?;
        Ok(self)
    }

    pub fn member_count(&self) -> u32 {
        self.member_count
    }

    pub fn max_members(&self) -> u32 {
        self.max_members
    }

    /// A team whose roster has reached capacity plays team-vs-team games
    /// instead of recruiting.
    pub fn is_official(&self) -> bool {
        self.member_count == self.max_members
    }

    pub fn open_slots(&self) -> u32 {
        self.max_members - self.member_count
    }

    pub fn add_member(&mut self) -> Result<(), ValidationError> {
        if self.member_count >= self.max_members {
            return Err(ValidationError::new(
                "memberCount",
                format!("team '{}' is already full ({} members)", self.name, self.max_members),
            ));
        }
        self.member_count += 1;
        Ok(())
    }

    pub fn profile(&self) -> TeamProfile {
        TeamProfile {
            id: self.id,
            name: self.name.clone(),
            region: self.region.clone(),
            skill_level: self.skill_level,
        }
    }
}

impl Validate for Team {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        if self.max_members == 0 {
            return Err(ValidationError::new("maxMembers", "must be at least 1"));
        }
        if self.member_count > self.max_members {
            return Err(ValidationError::new(
                "memberCount",
                format!("{} exceeds maxMembers {}", self.member_count, self.max_members),
            ));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamWire {
    id: i64,
    name: String,
    #[serde(default)]
    short_name: Option<String>,
    member_count: u32,
    max_members: u32,
    #[serde(default)]
    is_official: Option<bool>,
    skill_level: SkillLevel,
    region: String,
    #[serde(default)]
    stats: TeamStats,
    captain_id: i64,
    #[serde(default)]
    dna: Option<TeamDna>,
    #[serde(default)]
    level: Option<u32>,
    #[serde(default)]
    experience: Option<u32>,
}

impl TryFrom<TeamWire> for Team {
    type Error = ValidationError;

    fn try_from(wire: TeamWire) -> Result<Self, Self::Error> {
        let team = Team {
            id: wire.id,
            name: wire.name,
            short_name: wire.short_name,
            member_count: wire.member_count,
            max_members: wire.max_members,
            skill_level: wire.skill_level,
            region: wire.region,
            stats: wire.stats,
            captain_id: wire.captain_id,
            dna: wire.dna,
            level: wire.level,
            experience: wire.experience,
        };
        team.validate()?;
        if let Some(flag) = wire.is_official {
            if flag != team.is_official() {
                return Err(ValidationError::new(
                    "isOfficial",
                    format!(
                        "flag is {} but roster is {}/{}",
                        flag, team.member_count, team.max_members
                    ),
                ));
            }
        }
        Ok(team)
    }
}

impl From<Team> for TeamWire {
    fn from(team: Team) -> Self {
        let is_official = Some(team.is_official());
        TeamWire {
            id: team.id,
            name: team.name,
            short_name: team.short_name,
            member_count: team.member_count,
            max_members: team.max_members,
            is_official,
            skill_level: team.skill_level,
            region: team.region,
            stats: team.stats,
            captain_id: team.captain_id,
            dna: team.dna,
            level: team.level,
            experience: team.experience,
        }
    }
}

/// The public face of a team shown to opponents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamProfile {
    pub id: i64,
    pub name: String,
    pub region: String,
    pub skill_level: SkillLevel,
}

impl Validate for TeamProfile {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamRole {
    Captain,
    Member,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub user_id: i64,
    pub nickname: String,
    #[serde(default)]
    pub position: Option<Position>,
    pub role: TeamRole,
}

impl Validate for TeamMember {}

/// Request to register a new team
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    pub max_members: u32,
    pub skill_level: SkillLevel,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dna: Option<TeamDna>,
}

impl Validate for CreateTeamRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let name = self.name.trim();
        require_non_empty("name", name)?;
        if name.chars().count() > MAX_TEAM_NAME_LENGTH {
            return Err(ValidationError::new(
                "name",
                format!("cannot exceed {} characters", MAX_TEAM_NAME_LENGTH),
            ));
        }
        if !(MIN_TEAM_SIZE..=MAX_TEAM_SIZE).contains(&self.max_members) {
            return Err(ValidationError::new(
                "maxMembers",
                format!("must be between {} and {}", MIN_TEAM_SIZE, MAX_TEAM_SIZE),
            ));
        }
        require_non_empty("region", &self.region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn team_json(member_count: u32, max_members: u32) -> serde_json::Value {
        json!({
            "id": 3,
            "name": "Incheon Hoopers",
            "memberCount": member_count,
            "maxMembers": max_members,
            "skillLevel": "BEGINNER",
            "region": "Incheon",
            "captainId": 12
        })
    }

    #[test]
    fn is_official_is_derived_from_roster() {
        let team = Team::new(1, "Seoul Ballers", 1, 5, SkillLevel::Intermediate, "Seoul")
            .unwrap()
            .with_member_count(5)
            .unwrap();
        assert!(team.is_official());

        let body = serde_json::to_value(&team).unwrap();
        assert_eq!(body["isOfficial"], true);
        assert_eq!(body["memberCount"], 5);
    }

    #[test]
    fn decoding_rejects_roster_larger_than_capacity() {
        let err = serde_json::from_value::<Team>(team_json(6, 5)).unwrap_err();
        assert!(err.to_string().contains("memberCount"));
    }

    #[test]
    fn decoding_rejects_official_flag_that_disagrees_with_roster() {
        let mut body = team_json(3, 5);
        body["isOfficial"] = json!(true);
        let err = serde_json::from_value::<Team>(body).unwrap_err();
        assert!(err.to_string().contains("isOfficial"));
    }

    #[test]
    fn decoding_without_official_flag_derives_it() {
        let team: Team = serde_json::from_value(team_json(5, 5)).unwrap();
        assert!(team.is_official());
        assert_eq!(team.stats, TeamStats::default());
    }

    #[test]
    fn add_member_stops_at_capacity() {
        let mut team = Team::new(9, "Pickup", 1, 2, SkillLevel::Beginner, "Suwon").unwrap();
        assert!(team.add_member().is_ok());
        assert!(team.is_official());
        assert!(team.add_member().is_err());
        assert_eq!(team.member_count(), 2);
    }

    #[test]
    fn create_request_bounds_team_size() {
        let mut request = CreateTeamRequest {
            name: "Night Runners".to_string(),
            short_name: None,
            max_members: 5,
            skill_level: SkillLevel::Advanced,
            region: "Seoul".to_string(),
            dna: Some(TeamDna::RunAndGun),
        };
        assert!(request.validate().is_ok());

        request.max_members = 1;
        assert_eq!(request.validate().unwrap_err().field, "maxMembers");

        request.max_members = 16;
        assert_eq!(request.validate().unwrap_err().field, "maxMembers");
    }
}
