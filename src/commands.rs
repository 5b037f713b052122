//! Command dispatch: map each CLI subcommand to one client call.

use serde_json::Value;

use crate::cli::{ClubCmd, CoachCmd, Commands, CompetitionCmd, GameCmd, PlayerCmd, RefereeCmd};
use crate::{PerformanceQuery, Result, TmClient};


/// Run `command` against `client`. `Ok(None)` means the API returned no data.
pub async fn run(client: &TmClient, command: Commands) -> Result<Option<Value>> {
    let payload = match command {
        Commands::Player { cmd } => match cmd {
            PlayerCmd::Profile { id } => client.player_profile(id).await,
            PlayerCmd::Info { ids } => client.players_info(ids).await?,
            PlayerCmd::Gallery { id } => client.player_gallery(id).await,
            PlayerCmd::Performance { id, season } => {
                client
                    .player_performance(id, PerformanceQuery { season })
                    .await
            }
            PlayerCmd::Injuries { id } => client.player_injuries(id).await,
            PlayerCmd::MarketValue { id } => client.player_market_value_history(id).await,
            PlayerCmd::NationalCareer { id } => client.player_national_career(id).await,
            PlayerCmd::Transfers { id } => client.player_transfer_history(id).await,
            PlayerCmd::AllPerformance => client.players_performance().await,
        },

        Commands::Club { cmd } => match cmd {
            ClubCmd::Info { id } => client.club_info(id).await,
            ClubCmd::Batch { ids } => client.clubs_info(ids).await?,
            ClubCmd::Squad { id } => client.club_squad(id).await,
            ClubCmd::Stadium { id } => client.club_stadium(id).await,
            ClubCmd::Transfers { id } => client.club_transfer_history(id).await,
        },

        Commands::Coach { cmd } => match cmd {
            CoachCmd::Profile { id } => client.coach_profile(id).await,
            CoachCmd::Batch { ids } => client.coaches_info(ids).await?,
        },

        Commands::Competition { cmd } => match cmd {
            CompetitionCmd::Info { code } => client.competition_info(&code).await,
            CompetitionCmd::Table { code } => client.competition_table(&code).await,
            CompetitionCmd::Batch { ids } => client.competitions_info(ids).await?,
        },

        Commands::Game { cmd } => match cmd {
            GameCmd::Info { id } => client.game(id).await,
            GameCmd::Live { id } => client.game_live_detail(id).await,
        },

        Commands::Referee { cmd } => match cmd {
            RefereeCmd::Profile { id } => client.referee_profile(id).await,
            RefereeCmd::Batch { ids } => client.referees_info(ids).await?,
        },

        Commands::Stadium { id } => client.stadium_info(id).await,
        Commands::Search { term } => client.search_transfermarkt(&term).await,
        Commands::Attributes => client.attributes().await,
    };

    Ok(payload)
}

/// Render a payload for stdout. Absent payloads print as `null`.
pub fn render(payload: Option<&Value>, compact: bool) -> Result<String> {
    let null = Value::Null;
    let value = payload.unwrap_or(&null);
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(rendered)
}
