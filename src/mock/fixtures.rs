//! The demo league the mock backend boots with.

use chrono::{Duration, Utc};

use crate::mock::database::Tables;
use crate::models::{
    Gender, MatchRequest, MatchRequestStatus, NotificationKind, Position, SkillLevel, Team, TeamDna,
    TeamMember, TeamRole, User, ValidationError,
};

pub const FIXTURE_PASSWORD: &str = "password123";

pub const SEOUL_CAPTAIN_ID: i64 = 1;
pub const BUSAN_CAPTAIN_ID: i64 = 2;
pub const INCHEON_CAPTAIN_ID: i64 = 3;
pub const DAEGU_CAPTAIN_ID: i64 = 4;
pub const FREE_AGENT_ID: i64 = 5;

pub const SEOUL_CAPTAIN_EMAIL: &str = "captain.seoul@hoopmatch.dev";
pub const BUSAN_CAPTAIN_EMAIL: &str = "captain.busan@hoopmatch.dev";
pub const FREE_AGENT_EMAIL: &str = "free.agent@hoopmatch.dev";

pub const SEOUL_BALLERS_ID: i64 = 1;
pub const BUSAN_BLOCKERS_ID: i64 = 2;
pub const INCHEON_HOOPERS_ID: i64 = 3;
pub const DAEGU_DUNKERS_ID: i64 = 4;

struct FixtureUser {
    id: i64,
    email: &'static str,
    nickname: &'static str,
    gender: Gender,
    height: u16,
    position: Position,
    region: &'static str,
}

const USERS: [FixtureUser; 5] = [
    FixtureUser { id: SEOUL_CAPTAIN_ID, email: SEOUL_CAPTAIN_EMAIL, nickname: "Seoul Floor General", gender: Gender::Male, height: 178, position: Position::PointGuard, region: "Seoul" },
    FixtureUser { id: BUSAN_CAPTAIN_ID, email: BUSAN_CAPTAIN_EMAIL, nickname: "Busan Wall", gender: Gender::Male, height: 198, position: Position::Center, region: "Busan" },
    FixtureUser { id: INCHEON_CAPTAIN_ID, email: "captain.incheon@hoopmatch.dev", nickname: "Incheon Wing", gender: Gender::Female, height: 175, position: Position::SmallForward, region: "Incheon" },
    FixtureUser { id: DAEGU_CAPTAIN_ID, email: "captain.daegu@hoopmatch.dev", nickname: "Daegu Sniper", gender: Gender::Male, height: 185, position: Position::ShootingGuard, region: "Seoul" },
    FixtureUser { id: FREE_AGENT_ID, email: FREE_AGENT_EMAIL, nickname: "Free Agent", gender: Gender::Other, height: 190, position: Position::PowerForward, region: "Seoul" },
];

struct FixtureTeam {
    id: i64,
    name: &'static str,
    short_name: Option<&'static str>,
    captain_id: i64,
    members: u32,
    max_members: u32,
    skill_level: SkillLevel,
    region: &'static str,
    dna: Option<TeamDna>,
    level: u32,
    experience: u32,
}

const TEAMS: [FixtureTeam; 4] = [
    FixtureTeam { id: SEOUL_BALLERS_ID, name: "Seoul Ballers", short_name: Some("SB"), captain_id: SEOUL_CAPTAIN_ID, members: 5, max_members: 5, skill_level: SkillLevel::Intermediate, region: "Seoul", dna: Some(TeamDna::RunAndGun), level: 3, experience: 120 },
    FixtureTeam { id: BUSAN_BLOCKERS_ID, name: "Busan Blockers", short_name: Some("BB"), captain_id: BUSAN_CAPTAIN_ID, members: 5, max_members: 5, skill_level: SkillLevel::Intermediate, region: "Busan", dna: Some(TeamDna::Lockdown), level: 2, experience: 80 },
    FixtureTeam { id: INCHEON_HOOPERS_ID, name: "Incheon Hoopers", short_name: None, captain_id: INCHEON_CAPTAIN_ID, members: 3, max_members: 5, skill_level: SkillLevel::Beginner, region: "Incheon", dna: Some(TeamDna::TeamPlay), level: 1, experience: 10 },
    FixtureTeam { id: DAEGU_DUNKERS_ID, name: "Daegu Dunkers", short_name: None, captain_id: DAEGU_CAPTAIN_ID, members: 5, max_members: 5, skill_level: SkillLevel::Advanced, region: "Seoul", dna: None, level: 4, experience: 260 },
];

/// Builds the seeded tables. Every account shares `password_hash`.
pub(crate) fn seed(password_hash: &str) -> Result<Tables, ValidationError> {
    let mut tables = Tables::default();

    for fixture in USERS.iter() {
        tables.add_user(
            User {
                id: fixture.id,
                email: fixture.email.to_string(),
                nickname: fixture.nickname.to_string(),
                gender: Some(fixture.gender),
                address: Some(fixture.region.to_string()),
                height: Some(fixture.height),
                position: Some(fixture.position),
                play_style: None,
                status_message: None,
            },
            password_hash.to_string(),
        );
    }

    // Roster fillers have no login; ids start past the real accounts.
    let mut filler_id = 100;
    for fixture in TEAMS.iter() {
        let mut team = Team::new(
            fixture.id,
            fixture.name,
            fixture.captain_id,
            fixture.max_members,
            fixture.skill_level,
            fixture.region,
        )?
        .with_member_count(fixture.members)?;
        team.short_name = fixture.short_name.map(str::to_string);
        team.dna = fixture.dna;
        team.level = Some(fixture.level);
        team.experience = Some(fixture.experience);

        let captain = USERS.iter().find(|u| u.id == fixture.captain_id);
        tables.add_member(team.id, TeamMember {
            user_id: fixture.captain_id,
            nickname: captain.map(|u| u.nickname).unwrap_or("Captain").to_string(),
            position: captain.map(|u| u.position),
            role: TeamRole::Captain,
        });

        let open_positions = Position::ALL
            .iter()
            .copied()
            .filter(|p| Some(*p) != captain.map(|u| u.position));
        for (slot, position) in open_positions.take(fixture.members as usize - 1).enumerate() {
            filler_id += 1;
            tables.add_member(team.id, TeamMember {
                user_id: filler_id,
                nickname: format!("{} #{}", fixture.name, slot + 2),
                position: Some(position),
                role: TeamRole::Member,
            });
        }
        tables.teams.push(team);
    }

    let sent_at = Utc::now() - Duration::hours(2);
    tables.match_requests.push(MatchRequest {
        id: 1,
        requesting_team_id: BUSAN_BLOCKERS_ID,
        receiving_team_id: SEOUL_BALLERS_ID,
        message: "Saturday 7pm at Hangang court?".to_string(),
        status: MatchRequestStatus::Pending,
        created_at: sent_at,
        updated_at: sent_at,
    });
    tables.notify(
        SEOUL_CAPTAIN_ID,
        NotificationKind::MatchRequest,
        "Busan Blockers wants to play Seoul Ballers".to_string(),
        Some(1),
    );

    Ok(tables)
}
