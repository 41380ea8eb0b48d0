use crate::client::ApiClient;
use crate::flows::{FlowError, Route};
use crate::models::Team;

#[derive(Debug, Clone, PartialEq)]
pub enum MyTeamView {
    Team(Team),
    Redirect(Route),
}

/// What the "my team" page shows. A user without a team is sent to the
/// no-team page instead of rendering an empty team.
#[tracing::instrument(name = "Load my team", skip(api))]
pub async fn load_my_team(api: &ApiClient) -> Result<MyTeamView, FlowError> {
    let teams = api
        .teams()
        .my_teams()
        .await
        .map_err(|e| FlowError::from_api(e, Route::Home))?;

    match teams.into_iter().next() {
        Some(team) => Ok(MyTeamView::Team(team)),
        None => {
            tracing::info!("User has no team, redirecting");
            Ok(MyTeamView::Redirect(Route::NoTeam))
        }
    }
}
