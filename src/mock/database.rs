use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use chrono::Utc;

use crate::game::commentary::{compose_comment, describe, summarize};
use crate::game::TeamStatsCalculator;
use crate::models::auth::SignupRequest;
use crate::models::{
    CoachingReport, CreateGameRequest, CreateTeamRequest, FinishGameRequest, FinishGameResponse,
    Game, GameRecord, GameResult, GameStatus, MatchRequest, MatchRequestStatus, MatchedTeam,
    Notification, NotificationKind, PositionFeedback, SendMatchRequest, Team, TeamMember,
    TeamRole, UpdateProfileRequest, User,
};
use crate::mock::error::MockError;
use crate::mock::fixtures;
use crate::mock::password::hash_password;

pub(crate) struct MockUser {
    pub user: User,
    pub password_hash: String,
}

pub(crate) struct Membership {
    pub team_id: i64,
    pub member: TeamMember,
}

pub(crate) struct SubmittedFeedback {
    pub game_id: i64,
    pub team_id: i64,
    pub result: GameResult,
    pub feedbacks: Vec<PositionFeedback>,
}

pub(crate) struct Inbox {
    pub user_id: i64,
    pub notification: Notification,
}

#[derive(Default)]
pub(crate) struct Tables {
    pub users: Vec<MockUser>,
    pub teams: Vec<Team>,
    pub members: Vec<Membership>,
    pub games: Vec<Game>,
    pub feedbacks: Vec<SubmittedFeedback>,
    pub game_records: Vec<GameRecord>,
    pub reports: Vec<CoachingReport>,
    pub match_requests: Vec<MatchRequest>,
    pub matched_teams: Vec<MatchedTeam>,
    pub notifications: Vec<Inbox>,
}

fn next_id<T>(items: &[T], id: impl Fn(&T) -> i64) -> i64 {
    items.iter().map(id).max().unwrap_or(0) + 1
}

impl Tables {
    fn user(&self, user_id: i64) -> Result<&MockUser, MockError> {
        self.users
            .iter()
            .find(|u| u.user.id == user_id)
            .ok_or_else(|| MockError::NotFound(format!("User {} not found", user_id)))
    }

    fn team(&self, team_id: i64) -> Result<&Team, MockError> {
        self.teams
            .iter()
            .find(|t| t.id == team_id)
            .ok_or_else(|| MockError::NotFound(format!("Team {} not found", team_id)))
    }

    fn game(&self, game_id: i64) -> Result<&Game, MockError> {
        self.games
            .iter()
            .find(|g| g.id == game_id)
            .ok_or_else(|| MockError::NotFound(format!("Game {} not found", game_id)))
    }

    fn is_member(&self, team_id: i64, user_id: i64) -> bool {
        self.members
            .iter()
            .any(|m| m.team_id == team_id && m.member.user_id == user_id)
    }

    fn require_captain(&self, team: &Team, user_id: i64) -> Result<(), MockError> {
        if team.captain_id != user_id {
            return Err(MockError::Forbidden(format!(
                "Only the captain of {} can do that",
                team.name
            )));
        }
        Ok(())
    }

    /// Stats are always derived from the records, never stored.
    fn with_stats(&self, team: &Team) -> Team {
        let records: Vec<GameRecord> = self
            .game_records
            .iter()
            .filter(|r| r.team_id == team.id)
            .cloned()
            .collect();
        let reports = self.reports.iter().filter(|r| r.team_id == team.id).count() as u32;
        let mut team = team.clone();
        team.stats = TeamStatsCalculator::calculate(&records, reports);
        team
    }

    pub(crate) fn notify(&mut self, user_id: i64, kind: NotificationKind, message: String, related_id: Option<i64>) {
        let id = next_id(&self.notifications, |n| n.notification.id);
        self.notifications.push(Inbox {
            user_id,
            notification: Notification {
                id,
                kind,
                message,
                related_id,
                read: false,
                created_at: Utc::now(),
            },
        });
    }

    pub(crate) fn add_user(&mut self, user: User, password_hash: String) {
        self.users.push(MockUser { user, password_hash });
    }

    pub(crate) fn add_member(&mut self, team_id: i64, member: TeamMember) {
        self.members.push(Membership { team_id, member });
    }
}

/// In-memory stand-in for the backend.
///
/// Constructed explicitly and handed to the server as application data;
/// tests can keep their own handle to inspect it. Nothing survives a
/// restart.
#[derive(Default)]
pub struct MockDatabase {
    tables: RwLock<Tables>,
}

impl MockDatabase {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_tables(tables: Tables) -> Self {
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// The demo league every fixture account can log into with
    /// [`fixtures::FIXTURE_PASSWORD`].
    pub fn seeded() -> Result<Self, MockError> {
        let hash = hash_password(fixtures::FIXTURE_PASSWORD)?;
        Ok(Self::from_tables(fixtures::seed(&hash)?))
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // --- users -------------------------------------------------------------

    pub fn create_user(&self, request: &SignupRequest, password_hash: String) -> Result<User, MockError> {
        let mut tables = self.write();
        let email = request.email.trim().to_lowercase();
        if tables.users.iter().any(|u| u.user.email == email) {
            return Err(MockError::Conflict(format!("Email {} is already registered", email)));
        }
        let user = User {
            id: next_id(&tables.users, |u| u.user.id),
            email,
            nickname: request.nickname.trim().to_string(),
            gender: request.gender,
            address: request.address.clone(),
            height: request.height,
            position: request.position,
            play_style: request.play_style.clone(),
            status_message: None,
        };
        tables.add_user(user.clone(), password_hash);
        Ok(user)
    }

    /// The user and password hash registered under `email`, if any.
    pub fn credentials(&self, email: &str) -> Option<(User, String)> {
        let email = email.trim().to_lowercase();
        self.read()
            .users
            .iter()
            .find(|u| u.user.email == email)
            .map(|u| (u.user.clone(), u.password_hash.clone()))
    }

    pub fn user(&self, user_id: i64) -> Result<User, MockError> {
        Ok(self.read().user(user_id)?.user.clone())
    }

    pub fn update_user(&self, user_id: i64, update: &UpdateProfileRequest) -> Result<User, MockError> {
        let mut tables = self.write();
        let entry = tables
            .users
            .iter_mut()
            .find(|u| u.user.id == user_id)
            .ok_or_else(|| MockError::NotFound(format!("User {} not found", user_id)))?;
        update.apply_to(&mut entry.user);
        let user = entry.user.clone();

        for membership in tables.members.iter_mut().filter(|m| m.member.user_id == user_id) {
            membership.member.nickname = user.nickname.clone();
            membership.member.position = user.position;
        }
        Ok(user)
    }

    // --- teams -------------------------------------------------------------

    pub fn teams_of_user(&self, user_id: i64) -> Result<Vec<Team>, MockError> {
        let tables = self.read();
        tables.user(user_id)?;
        Ok(tables
            .teams
            .iter()
            .filter(|t| tables.is_member(t.id, user_id))
            .map(|t| tables.with_stats(t))
            .collect())
    }

    pub fn create_team(&self, user_id: i64, request: &CreateTeamRequest) -> Result<Team, MockError> {
        let mut tables = self.write();
        let captain = tables.user(user_id)?.user.clone();
        let name = request.name.trim();
        if tables.teams.iter().any(|t| t.name.eq_ignore_ascii_case(name)) {
            return Err(MockError::Conflict(format!("Team name '{}' is already taken", name)));
        }

        let mut team = Team::new(
            next_id(&tables.teams, |t| t.id),
            name,
            user_id,
            request.max_members,
            request.skill_level,
            request.region.trim(),
        )?;
        team.short_name = request.short_name.clone();
        team.dna = request.dna;
        team.level = Some(1);
        team.experience = Some(0);

        tables.teams.push(team.clone());
        tables.add_member(team.id, TeamMember {
            user_id,
            nickname: captain.nickname,
            position: captain.position,
            role: TeamRole::Captain,
        });
        tracing::info!("Team {} created by user {}", team.id, user_id);
        Ok(team)
    }

    pub fn team(&self, team_id: i64) -> Result<Team, MockError> {
        let tables = self.read();
        let team = tables.team(team_id)?;
        Ok(tables.with_stats(team))
    }

    pub fn members(&self, team_id: i64) -> Result<Vec<TeamMember>, MockError> {
        let tables = self.read();
        tables.team(team_id)?;
        Ok(tables
            .members
            .iter()
            .filter(|m| m.team_id == team_id)
            .map(|m| m.member.clone())
            .collect())
    }

    /// Other official teams, closest first: same region before other
    /// regions, then by distance in skill tier.
    pub fn match_suggestions(&self, team_id: i64) -> Result<Vec<Team>, MockError> {
        let tables = self.read();
        let team = tables.team(team_id)?;
        let mut candidates: Vec<&Team> = tables
            .teams
            .iter()
            .filter(|t| t.id != team_id && t.is_official())
            .collect();
        candidates.sort_by_key(|t| {
            (
                t.region != team.region,
                (t.skill_level.tier() - team.skill_level.tier()).abs(),
                t.id,
            )
        });
        Ok(candidates.into_iter().map(|t| tables.with_stats(t)).collect())
    }

    pub fn matched_teams(&self, team_id: i64) -> Result<Vec<MatchedTeam>, MockError> {
        let tables = self.read();
        tables.team(team_id)?;
        let mut matched: Vec<MatchedTeam> = tables
            .matched_teams
            .iter()
            .filter(|m| m.team_id == team_id)
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(matched)
    }

    // --- games -------------------------------------------------------------

    /// Scheduling a game also records the pairing as a matched team for
    /// the team that created it.
    pub fn create_game(&self, user_id: i64, request: &CreateGameRequest) -> Result<Game, MockError> {
        let mut tables = self.write();
        let team = tables.team(request.team_id)?.clone();
        let opponent = tables.team(request.opponent_team_id)?.profile();
        tables.require_captain(&team, user_id)?;

        let now = Utc::now();
        let game = Game {
            id: next_id(&tables.games, |g| g.id),
            home_team_id: team.id,
            away_team_id: opponent.id,
            status: GameStatus::Scheduled,
            created_at: now,
            finished_at: None,
        };
        tables.games.push(game.clone());

        let matched_id = next_id(&tables.matched_teams, |m| m.id);
        tables.matched_teams.push(MatchedTeam {
            id: matched_id,
            team_id: team.id,
            opponent,
            matched_at: now,
        });
        Ok(game)
    }

    pub fn game(&self, game_id: i64) -> Result<Game, MockError> {
        Ok(self.read().game(game_id)?.clone())
    }

    /// Marks the game finished, keeps the feedback and appends the team's
    /// game record.
    pub fn finish_game(
        &self,
        user_id: i64,
        game_id: i64,
        request: &FinishGameRequest,
    ) -> Result<FinishGameResponse, MockError> {
        let mut tables = self.write();
        let game = tables.game(game_id)?.clone();
        if !game.involves(request.team_id) {
            return Err(MockError::BadRequest(format!(
                "Team {} did not play game {}",
                request.team_id, game_id
            )));
        }
        let team = tables.team(request.team_id)?.clone();
        if !tables.is_member(team.id, user_id) {
            return Err(MockError::Forbidden(format!("You are not a member of {}", team.name)));
        }
        if tables
            .feedbacks
            .iter()
            .any(|f| f.game_id == game_id && f.team_id == team.id)
        {
            return Err(MockError::Conflict(format!(
                "Feedback for game {} was already submitted by {}",
                game_id, team.name
            )));
        }

        let now = Utc::now();
        if let Some(stored) = tables.games.iter_mut().find(|g| g.id == game_id) {
            stored.status = GameStatus::Finished;
            stored.finished_at.get_or_insert(now);
        }

        let record = GameRecord {
            id: next_id(&tables.game_records, |r| r.id),
            team_id: team.id,
            game_id,
            opponent_name: request.opponent_name.clone(),
            result: request.result,
            ai_comment: compose_comment(request.result, team.dna, &request.feedbacks),
            created_at: now,
        };
        tables.game_records.push(record);
        tables.feedbacks.push(SubmittedFeedback {
            game_id,
            team_id: team.id,
            result: request.result,
            feedbacks: request.feedbacks.clone(),
        });

        Ok(FinishGameResponse {
            game_id,
            team_id: team.id,
        })
    }

    /// Builds the coaching report from submitted feedback. Asking twice
    /// returns the first report.
    pub fn create_report(&self, user_id: i64, game_id: i64, team_id: i64) -> Result<CoachingReport, MockError> {
        let mut tables = self.write();
        tables.game(game_id)?;
        let team = tables.team(team_id)?.clone();
        if !tables.is_member(team_id, user_id) {
            return Err(MockError::Forbidden(format!("You are not a member of {}", team.name)));
        }
        if let Some(existing) = tables
            .reports
            .iter()
            .find(|r| r.game_id == game_id && r.team_id == team_id)
        {
            return Ok(existing.clone());
        }

        let submitted = tables
            .feedbacks
            .iter()
            .find(|f| f.game_id == game_id && f.team_id == team_id)
            .ok_or_else(|| {
                MockError::NotFound(format!("No feedback submitted for game {} by team {}", game_id, team_id))
            })?;
        let summary = summarize(&submitted.feedbacks);
        let ai_comment = tables
            .game_records
            .iter()
            .find(|r| r.game_id == game_id && r.team_id == team_id)
            .map(|r| r.ai_comment.clone())
            .unwrap_or_else(|| compose_comment(submitted.result, team.dna, &submitted.feedbacks));

        let report = CoachingReport {
            game_id,
            team_id,
            ai_comment,
            strengths: describe(&summary.strengths),
            weaknesses: describe(&summary.weaknesses),
            created_at: Utc::now(),
        };
        tables.reports.push(report.clone());
        tables.notify(
            team.captain_id,
            NotificationKind::GameReport,
            format!("The coaching report for {} is ready", team.name),
            Some(game_id),
        );
        Ok(report)
    }

    pub fn game_records(&self, team_id: i64) -> Result<Vec<GameRecord>, MockError> {
        let tables = self.read();
        tables.team(team_id)?;
        let mut records: Vec<GameRecord> = tables
            .game_records
            .iter()
            .filter(|r| r.team_id == team_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(records)
    }

    // --- match requests ----------------------------------------------------

    pub fn send_match_request(&self, user_id: i64, request: &SendMatchRequest) -> Result<MatchRequest, MockError> {
        let mut tables = self.write();
        let requesting = tables.team(request.requesting_team_id)?.clone();
        let receiving = tables.team(request.receiving_team_id)?.clone();
        tables.require_captain(&requesting, user_id)?;
        if !requesting.is_official() || !receiving.is_official() {
            return Err(MockError::BadRequest(
                "Only official teams with a full roster can request matches".to_string(),
            ));
        }
        let duplicate = tables.match_requests.iter().any(|r| {
            r.status == MatchRequestStatus::Pending
                && r.requesting_team_id == requesting.id
                && r.receiving_team_id == receiving.id
        });
        if duplicate {
            return Err(MockError::Conflict(format!(
                "A request to {} is already pending",
                receiving.name
            )));
        }

        let now = Utc::now();
        let match_request = MatchRequest {
            id: next_id(&tables.match_requests, |r| r.id),
            requesting_team_id: requesting.id,
            receiving_team_id: receiving.id,
            message: request.message.clone(),
            status: MatchRequestStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        tables.match_requests.push(match_request.clone());
        tables.notify(
            receiving.captain_id,
            NotificationKind::MatchRequest,
            format!("{} wants to play {}", requesting.name, receiving.name),
            Some(match_request.id),
        );
        Ok(match_request)
    }

    /// Requests addressed to teams the user captains, newest first.
    pub fn received_match_requests(&self, user_id: i64) -> Vec<MatchRequest> {
        let tables = self.read();
        let captained: Vec<i64> = tables
            .teams
            .iter()
            .filter(|t| t.captain_id == user_id)
            .map(|t| t.id)
            .collect();
        let mut requests: Vec<MatchRequest> = tables
            .match_requests
            .iter()
            .filter(|r| captained.contains(&r.receiving_team_id))
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.id.cmp(&a.id));
        requests
    }

    /// Accepting records a matched team for the requesting side only.
    pub fn decide_match_request(&self, user_id: i64, request_id: i64, accept: bool) -> Result<MatchRequest, MockError> {
        let mut tables = self.write();
        let position = tables
            .match_requests
            .iter()
            .position(|r| r.id == request_id)
            .ok_or_else(|| MockError::NotFound(format!("Match request {} not found", request_id)))?;
        let (requesting_id, receiving_id) = {
            let r = &tables.match_requests[position];
            (r.requesting_team_id, r.receiving_team_id)
        };
        let receiving = tables.team(receiving_id)?.clone();
        let requesting = tables.team(requesting_id)?.clone();
        tables.require_captain(&receiving, user_id)?;

        let now = Utc::now();
        let decided = {
            let request = &mut tables.match_requests[position];
            if accept {
                request.accept(now)?;
            } else {
                request.reject(now)?;
            }
            request.clone()
        };

        if accept {
            let matched_id = next_id(&tables.matched_teams, |m| m.id);
            tables.matched_teams.push(MatchedTeam {
                id: matched_id,
                team_id: requesting.id,
                opponent: receiving.profile(),
                matched_at: now,
            });
            tables.notify(
                requesting.captain_id,
                NotificationKind::MatchAccepted,
                format!("{} accepted your match request", receiving.name),
                Some(request_id),
            );
        } else {
            tables.notify(
                requesting.captain_id,
                NotificationKind::MatchRejected,
                format!("{} declined your match request", receiving.name),
                Some(request_id),
            );
        }
        Ok(decided)
    }

    // --- notifications -----------------------------------------------------

    pub fn notifications(&self, user_id: i64) -> Vec<Notification> {
        let tables = self.read();
        let mut notifications: Vec<Notification> = tables
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .map(|n| n.notification.clone())
            .collect();
        notifications.sort_by(|a, b| b.id.cmp(&a.id));
        notifications
    }

    pub fn mark_notification_read(&self, user_id: i64, notification_id: i64) -> Result<(), MockError> {
        let mut tables = self.write();
        let entry = tables
            .notifications
            .iter_mut()
            .find(|n| n.user_id == user_id && n.notification.id == notification_id)
            .ok_or_else(|| MockError::NotFound(format!("Notification {} not found", notification_id)))?;
        entry.notification.read = true;
        Ok(())
    }
}
