use clap::{Parser, Subcommand};

use crate::fantasy::rules::{SALARY_CAP, SQUAD_SIZE, STARTERS_REQUIRED};
use crate::fantasy::squad_selector::SquadSelector;
use crate::models::league::LeagueId;
use crate::models::player::{format_money, Player, PlayerId};
use crate::utils::errors::ValidationError;
use crate::views::auth::AuthView;
use crate::views::dashboard::DashboardView;
use crate::views::leagues::LeagueView;
use crate::views::lineup::LineupView;
use crate::views::squad::SquadView;
use crate::views::standings::StandingsView;
use crate::views::{AppContext, ViewStatus};

/// GridCap fantasy football client
#[derive(Parser, Debug)]
#[command(name = "gridcap", author, version, about, long_about = None)]
pub struct Args {
    /// Base URL of the fantasy API
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Session file holding the token and selected league
    #[arg(long, global = true)]
    pub session_file: Option<String>,

    /// Keep the session in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an account and log in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "GRIDCAP_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Log in with an existing account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "GRIDCAP_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the cached profile
    Whoami,
    /// Profile, leagues and the selected league
    Dashboard,
    /// Select, create or join leagues
    Leagues {
        #[command(subcommand)]
        action: LeagueCommand,
    },
    /// List the player catalog by position
    Players,
    /// Show or save the squad for the selected league
    Squad {
        #[command(subcommand)]
        action: SquadCommand,
    },
    /// Show the squad or set the gameweek lineup
    Lineup {
        #[command(subcommand)]
        action: LineupCommand,
    },
    /// League standings (defaults to the selected league)
    Standings { league_id: Option<LeagueId> },
}

#[derive(Subcommand, Debug)]
pub enum LeagueCommand {
    Select { league_id: LeagueId },
    Create { name: String },
    Join { league_id: LeagueId },
}

#[derive(Subcommand, Debug)]
pub enum SquadCommand {
    Show,
    /// Replace the selection with these player ids and save it
    Save {
        #[arg(long, value_delimiter = ',', required = true)]
        players: Vec<PlayerId>,
    },
}

#[derive(Subcommand, Debug)]
pub enum LineupCommand {
    Show,
    Set {
        #[arg(long, value_delimiter = ',', required = true)]
        starters: Vec<PlayerId>,
        #[arg(long)]
        captain: PlayerId,
        #[arg(long)]
        vice: PlayerId,
    },
}

/// Runs one command against its view and returns the view's status line.
pub async fn execute(command: Command, ctx: &mut AppContext) -> ViewStatus {
    match command {
        Command::Register {
            name,
            email,
            password,
        } => {
            let mut view = AuthView::default();
            view.register(ctx, &name, &email, &password).await;
            view.status
        }
        Command::Login { email, password } => {
            let mut view = AuthView::default();
            view.login(ctx, &email, &password).await;
            view.status
        }
        Command::Logout => {
            let mut view = AuthView::default();
            view.logout(ctx);
            view.status
        }
        Command::Whoami => whoami(ctx),
        Command::Dashboard => {
            let view = DashboardView::load(ctx).await;
            render_dashboard(&view);
            view.status
        }
        Command::Leagues { action } => leagues(action, ctx).await,
        Command::Players => players(ctx).await,
        Command::Squad { action } => squad(action, ctx).await,
        Command::Lineup { action } => lineup(action, ctx).await,
        Command::Standings { league_id } => standings(league_id, ctx).await,
    }
}

fn whoami(ctx: &AppContext) -> ViewStatus {
    let mut status = ViewStatus::default();
    match (ctx.session.token(), ctx.session.current_user()) {
        (Some(_), Some(user)) => {
            println!("{} <{}> (id {})", user.name, user.email, user.id);
            if let Some(league_id) = ctx.session.selected_league() {
                println!("Selected league: {league_id}");
            }
        }
        _ => status.fail(ValidationError::NotLoggedIn),
    }
    status
}

async fn leagues(action: LeagueCommand, ctx: &mut AppContext) -> ViewStatus {
    match action {
        LeagueCommand::Select { league_id } => {
            let mut view = DashboardView::load(ctx).await;
            if !view.status.is_ok() {
                return view.status;
            }
            if view.leagues.iter().all(|league| league.league_id != league_id) {
                view.status.fail(ValidationError::InvalidLeagueId);
                return view.status;
            }
            view.select_league(ctx, league_id);
            view.status
        }
        LeagueCommand::Create { name } => {
            let mut view = LeagueView::default();
            view.create(ctx, &name).await;
            view.status
        }
        LeagueCommand::Join { league_id } => {
            let mut view = LeagueView::default();
            view.join(ctx, league_id).await;
            view.status
        }
    }
}

async fn players(ctx: &AppContext) -> ViewStatus {
    let mut status = ViewStatus::default();
    if let Err(error) = ctx.require_token() {
        status.fail(error);
        return status;
    }
    match ctx.api.players().await {
        Ok(catalog) => render_catalog(&SquadSelector::new(catalog)),
        Err(error) => status.fail(error),
    }
    status
}

async fn squad(action: SquadCommand, ctx: &AppContext) -> ViewStatus {
    let mut view = SquadView::load(ctx).await;
    if !view.status.is_ok() {
        return view.status;
    }

    if let SquadCommand::Save { players } = action {
        view.select_only(&players);
        if view.status.is_ok() {
            view.save(ctx).await;
        }
    }
    render_squad(&view);
    view.status
}

async fn lineup(action: LineupCommand, ctx: &AppContext) -> ViewStatus {
    let mut view = LineupView::load(ctx).await;
    if !view.status.is_ok() {
        return view.status;
    }

    if let LineupCommand::Set {
        starters,
        captain,
        vice,
    } = action
    {
        let picked = view.select_starters(&starters)
            && view.set_captain(Some(captain))
            && view.set_vice(Some(vice));
        if picked {
            view.submit(ctx).await;
        }
    }
    render_lineup(&view);
    view.status
}

async fn standings(league_id: Option<LeagueId>, ctx: &AppContext) -> ViewStatus {
    let selected = match league_id {
        Some(id) => Ok(id),
        None => ctx.require_league(),
    };
    let league_id = match selected {
        Ok(id) => id,
        Err(error) => {
            let mut status = ViewStatus::default();
            status.fail(error);
            return status;
        }
    };

    let view = StandingsView::load(ctx, league_id).await;
    if view.status.is_ok() {
        println!("{:>4}  {:<28} {:>6}", "#", "Team", "Pts");
        for (rank, row) in view.ranked() {
            println!("{rank:>4}  {:<28} {:>6}", row.team_name, row.points);
        }
    }
    view.status
}

fn render_dashboard(view: &DashboardView) {
    if let Some(user) = &view.user {
        println!("Welcome, {}!", user.name);
    }
    if view.leagues.is_empty() {
        println!("You have not joined any leagues yet.");
        return;
    }
    println!("Your leagues:");
    for league in &view.leagues {
        let marker = if view.selected_league == Some(league.league_id) { "*" } else { " " };
        println!(" {marker} {:>4}  {}", league.league_id, league.name);
    }
}

fn render_player(player: &Player, marker: &str) {
    println!(
        "  {marker} {:>4}  {:<24} {:<4} {:>7}",
        player.id,
        player.name,
        player.team,
        format_money(player.cost)
    );
}

fn render_catalog(selector: &SquadSelector) {
    for (position, players) in selector.by_position() {
        println!("{position} ({})", players.len());
        for player in players {
            let marker = if selector.is_selected(player.id) { "*" } else { " " };
            render_player(player, marker);
        }
    }
}

fn render_squad(view: &SquadView) {
    let selector = &view.selector;
    for player in selector.selected() {
        render_player(player, "*");
    }
    println!(
        "Selected: {}/{SQUAD_SIZE}  Budget used: {} / {}",
        selector.selected().len(),
        format_money(selector.total_cost()),
        format_money(SALARY_CAP)
    );
}

fn render_lineup(view: &LineupView) {
    let Some(builder) = &view.builder else {
        return;
    };
    for player in builder.squad() {
        let marker = if builder.captain() == Some(player.id) {
            "C"
        } else if builder.vice() == Some(player.id) {
            "V"
        } else if builder.is_starter(player.id) {
            "*"
        } else {
            " "
        };
        render_player(player, marker);
    }
    println!(
        "Starters selected: {}/{STARTERS_REQUIRED}",
        builder.starters().len()
    );
}
