use crate::api::*;
use crate::db::SQLite;
use crate::error::LedgerError;
use crate::propbook::PropBook;
use crate::settings::Settings;
use anyhow::{Context, Result};
use axum::extract::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use axum_macros::debug_handler;
use clap::Parser;
use env_logger::{Builder, WriteStyle};
use log::{debug, error, LevelFilter};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use tokio::task::JoinHandle;

mod api;
mod client;
mod db;
mod error;
mod leaderboard;
mod money;
mod odds;
mod propbook;
mod settings;
mod settlement;

type ApiResult<T> = Result<T, (StatusCode, Json<ErrorResponse>)>;

fn map_ledger_err(e: LedgerError) -> (StatusCode, Json<ErrorResponse>) {
    let kind = e.kind();
    if kind == ErrorKind::Internal {
        error!("{}", e);
    } else {
        debug!("Rejected request: {}", e);
    }
    (
        kind.status_code(),
        Json(ErrorResponse {
            kind,
            message: e.to_string(),
        }),
    )
}

#[debug_handler]
async fn create_party(
    State(state): State<Arc<PropBook>>,
    Json(request): Json<PostRequest<CreatePartyRequest>>,
) -> ApiResult<(StatusCode, Json<Party>)> {
    let (user, request) = (request.user, request.data);
    let party = state
        .create_party(&user, &request.name, request.starting_balance)
        .await
        .map_err(map_ledger_err)?;
    Ok((StatusCode::CREATED, Json(party)))
}
async fn join_party(
    State(state): State<Arc<PropBook>>,
    Json(request): Json<PostRequest<JoinPartyRequest>>,
) -> ApiResult<Json<Member>> {
    let member = state
        .join_party(&request.user, &request.data.join_code)
        .await
        .map_err(map_ledger_err)?;
    Ok(Json(member))
}
async fn leave_party(
    State(state): State<Arc<PropBook>>,
    Json(request): Json<PostRequest<PartyRequest>>,
) -> ApiResult<()> {
    state
        .leave_party(request.data.party, &request.user)
        .await
        .map_err(map_ledger_err)
}
async fn delete_party(
    State(state): State<Arc<PropBook>>,
    Json(request): Json<PostRequest<PartyRequest>>,
) -> ApiResult<()> {
    state
        .delete_party(request.data.party, &request.user)
        .await
        .map_err(map_ledger_err)
}
async fn get_party(
    State(state): State<Arc<PropBook>>,
    Json(request): Json<PartyRequest>,
) -> ApiResult<Json<Party>> {
    let party = state
        .get_party(request.party)
        .await
        .map_err(map_ledger_err)?;
    Ok(Json(party))
}
async fn get_parties(
    State(state): State<Arc<PropBook>>,
    Json(request): Json<UserRequest>,
) -> ApiResult<Json<Vec<Party>>> {
    let parties = state
        .get_parties(&request.user)
        .await
        .map_err(map_ledger_err)?;
    Ok(Json(parties))
}
#[debug_handler]
async fn create_prop(
    State(state): State<Arc<PropBook>>,
    Json(request): Json<PostRequest<CreatePropRequest>>,
) -> ApiResult<(StatusCode, Json<Prop>)> {
    let (user, request) = (request.user, request.data);
    let prop = state
        .create_prop(
            &user,
            request.party,
            &request.title,
            &request.description,
            (request.option1.as_str(), request.odds1),
            (request.option2.as_str(), request.odds2),
        )
        .await
        .map_err(map_ledger_err)?;
    Ok((StatusCode::CREATED, Json(prop)))
}
async fn edit_prop(
    State(state): State<Arc<PropBook>>,
    Json(request): Json<PostRequest<EditPropRequest>>,
) -> ApiResult<Json<Prop>> {
    let (user, request) = (request.user, request.data);
    let prop = state
        .edit_prop(request.prop, &user, request.edit)
        .await
        .map_err(map_ledger_err)?;
    Ok(Json(prop))
}
async fn get_prop(
    State(state): State<Arc<PropBook>>,
    Json(request): Json<PropRequest>,
) -> ApiResult<Json<Prop>> {
    let prop = state.get_prop(request.prop).await.map_err(map_ledger_err)?;
    Ok(Json(prop))
}
async fn get_props(
    State(state): State<Arc<PropBook>>,
    Json(request): Json<PartyRequest>,
) -> ApiResult<Json<Vec<Prop>>> {
    let props = state
        .get_props(request.party)
        .await
        .map_err(map_ledger_err)?;
    Ok(Json(props))
}
#[debug_handler]
async fn place_wager(
    State(state): State<Arc<PropBook>>,
    Json(request): Json<PostRequest<PlaceWagerRequest>>,
) -> ApiResult<(StatusCode, Json<Wager>)> {
    let (user, request) = (request.user, request.data);
    let wager = state
        .place_wager(&user, request.prop, &request.choice, request.stake)
        .await
        .map_err(map_ledger_err)?;
    Ok((StatusCode::CREATED, Json(wager)))
}
async fn resolve_prop(
    State(state): State<Arc<PropBook>>,
    Json(request): Json<PostRequest<ResolvePropRequest>>,
) -> ApiResult<Json<SettlementReport>> {
    let (user, request) = (request.user, request.data);
    let report = state
        .resolve_prop(request.prop, &request.winning_choice, &user)
        .await
        .map_err(map_ledger_err)?;
    Ok(Json(report))
}
async fn resettle_prop(
    State(state): State<Arc<PropBook>>,
    Json(request): Json<PostRequest<PropRequest>>,
) -> ApiResult<Json<SettlementReport>> {
    let report = state
        .resettle_prop(request.data.prop, &request.user)
        .await
        .map_err(map_ledger_err)?;
    Ok(Json(report))
}
async fn get_balance(
    State(state): State<Arc<PropBook>>,
    Json(request): Json<MemberRequest>,
) -> ApiResult<Json<BalanceResponse>> {
    let balance = state
        .get_balance(request.party, &request.user)
        .await
        .map_err(map_ledger_err)?;
    Ok(Json(BalanceResponse {
        party: request.party,
        user: request.user,
        balance,
    }))
}
async fn get_leaderboard(
    State(state): State<Arc<PropBook>>,
    Json(request): Json<PostRequest<PartyRequest>>,
) -> ApiResult<Json<Vec<LeaderboardEntry>>> {
    let leaderboard = state
        .get_leaderboard(request.data.party, &request.user)
        .await
        .map_err(map_ledger_err)?;
    Ok(Json(leaderboard))
}
async fn get_wagers(
    State(state): State<Arc<PropBook>>,
    Json(request): Json<MemberRequest>,
) -> ApiResult<Json<Vec<WagerResponse>>> {
    let wagers = state
        .get_wagers(request.party, &request.user)
        .await
        .map_err(map_ledger_err)?;
    Ok(Json(wagers))
}

#[derive(Parser)]
struct Args {
    #[arg(short, long)]
    port: Option<u16>,
    #[arg(short, long)]
    db: Option<String>,
    /// Settings file, `propbook.toml` is used if present otherwise
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Args::parse();
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        settings.server.port = port;
    }
    if let Some(db) = cli.db {
        settings.database.url = db;
    }
    Builder::default()
        .filter_level(LevelFilter::from_str(&settings.log.level).unwrap_or(LevelFilter::Debug))
        .write_style(WriteStyle::Always)
        .init();
    let (_port, handle) = run_server(&settings).await?;
    handle.await?;
    Ok(())
}

async fn run_server(settings: &Settings) -> Result<(u16, JoinHandle<()>)> {
    let db = SQLite::new(&settings.database.url, settings.database.max_connections)
        .await
        .context("failed to open database")?;
    let state = Arc::new(PropBook::new(Box::new(db), settings));
    let app = Router::new()
        .route("/create_party", post(create_party))
        .route("/join_party", post(join_party))
        .route("/leave_party", post(leave_party))
        .route("/delete_party", post(delete_party))
        .route("/get_party", post(get_party))
        .route("/get_parties", post(get_parties))
        .route("/create_prop", post(create_prop))
        .route("/edit_prop", post(edit_prop))
        .route("/get_prop", post(get_prop))
        .route("/get_props", post(get_props))
        .route("/place_wager", post(place_wager))
        .route("/resolve_prop", post(resolve_prop))
        .route("/resettle_prop", post(resettle_prop))
        .route("/get_balance", post(get_balance))
        .route("/get_leaderboard", post(get_leaderboard))
        .route("/get_wagers", post(get_wagers))
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid listen address")?;
    let server = axum::Server::try_bind(&addr)?.serve(app.into_make_service());
    let port = server.local_addr().port();
    debug!("Listening on {}", server.local_addr());
    let handle = tokio::spawn(async move {
        if let Err(e) = server.await {
            error!("Server stopped: {}", e);
        }
    });
    Ok((port, handle))
}
