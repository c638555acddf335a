use actix_web::{web, App, HttpServer, HttpResponse, Result, HttpRequest, middleware};
use serde::Deserialize;
use std::sync::Mutex;
use tracing::info;

use crate::demo::demo_teams;
use crate::display::ScheduleReport;
use crate::error::LeagueError;
use crate::parser::load_teams_from_reader;
use crate::schedule::{
    build_slot_universe, schedule_round_robin, LeagueSchedule, PreferenceType, SlotId, Team, TeamId, TeamOrder,
};

pub struct AppState {
    /// Last schedule generated from an uploaded roster
    pub schedule: Mutex<Option<LeagueSchedule>>,
    pub admin_password: String,
    pub seed: Option<u64>,
}

impl AppState {
    pub fn new(admin_password: String, seed: Option<u64>) -> Self {
        Self {
            schedule: Mutex::new(None),
            admin_password,
            seed,
        }
    }
}

#[derive(Deserialize)]
pub struct SeedQuery {
    seed: Option<u64>,
}

#[derive(Deserialize)]
pub struct PreferenceRequest {
    slot: SlotId,
    #[serde(rename = "type")]
    pref_type: PreferenceType,
}

#[derive(Deserialize)]
pub struct TeamRequest {
    name: String,
    #[serde(default)]
    preferences: Vec<PreferenceRequest>,
}

#[derive(Deserialize)]
pub struct GenerateRequest {
    teams: Vec<TeamRequest>,
    /// Positions in `teams`, first to last; shuffled when absent
    order: Option<Vec<u32>>,
    seed: Option<u64>,
}

fn bad_request(err: LeagueError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({"success": false, "error": err.to_string()}))
}

fn schedule_response(schedule: &LeagueSchedule) -> HttpResponse {
    HttpResponse::Ok().json(ScheduleReport::from_schedule(schedule))
}

// Demo league endpoint
async fn get_demo(query: web::Query<SeedQuery>, state: web::Data<AppState>) -> Result<HttpResponse> {
    let slots = build_slot_universe();
    let teams = match demo_teams(slots.len() as u32) {
        Ok(teams) => teams,
        Err(e) => return Ok(bad_request(e)),
    };
    let order = TeamOrder::Shuffled(query.seed.or(state.seed));

    match schedule_round_robin(slots, teams, &order) {
        Ok(schedule) => Ok(schedule_response(&schedule)),
        Err(e) => Ok(bad_request(e)),
    }
}

// Admin CSV upload endpoint
async fn admin_upload(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let password = req
        .headers()
        .get("X-Admin-Password")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if password != state.admin_password {
        return Ok(HttpResponse::Unauthorized().json(serde_json::json!({"success": false, "error": "Unauthorized"})));
    }

    let slots = build_slot_universe();
    let schedule = load_teams_from_reader(body.as_ref(), &slots)
        .and_then(|teams| schedule_round_robin(slots, teams, &TeamOrder::Shuffled(state.seed)));

    match schedule {
        Ok(schedule) => {
            info!(matchups = schedule.matchups().len(), "stored schedule from upload");
            let report = ScheduleReport::from_schedule(&schedule);
            *state
                .schedule
                .lock()
                .map_err(|_| actix_web::error::ErrorInternalServerError("schedule lock poisoned"))? = Some(schedule);
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "schedule": report,
            })))
        }
        Err(e) => Ok(bad_request(e)),
    }
}

// Ad-hoc generation from a JSON roster; nothing is stored
async fn generate(req: web::Json<GenerateRequest>) -> Result<HttpResponse> {
    let req = req.into_inner();
    let slots = build_slot_universe();
    let slot_count = slots.len() as u32;

    let teams: Result<Vec<Team>, LeagueError> = req
        .teams
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let prefs: Vec<(SlotId, PreferenceType)> = t.preferences.iter().map(|p| (p.slot, p.pref_type)).collect();
            Team::new(TeamId(i as u32), t.name.clone(), &prefs, slot_count)
        })
        .collect();
    let teams = match teams {
        Ok(teams) => teams,
        Err(e) => return Ok(bad_request(e)),
    };

    let order = match req.order {
        Some(positions) => TeamOrder::Fixed(positions.into_iter().map(TeamId).collect()),
        None => TeamOrder::Shuffled(req.seed),
    };

    match schedule_round_robin(slots, teams, &order) {
        Ok(schedule) => Ok(schedule_response(&schedule)),
        Err(e) => Ok(bad_request(e)),
    }
}

// Schedule endpoint
async fn get_schedule(state: web::Data<AppState>) -> Result<HttpResponse> {
    let schedule = state
        .schedule
        .lock()
        .map_err(|_| actix_web::error::ErrorInternalServerError("schedule lock poisoned"))?;

    match *schedule {
        Some(ref schedule) => Ok(schedule_response(schedule)),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({"error": "Schedule not available"}))),
    }
}

async fn get_slots() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(build_slot_universe()))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/demo", web::get().to(get_demo))
        .route("/api/upload", web::post().to(admin_upload))
        .route("/api/generate", web::post().to(generate))
        .route("/api/schedule", web::get().to(get_schedule))
        .route("/api/slots", web::get().to(get_slots));
}

pub async fn start_server(port: u16, admin_password: String, seed: Option<u64>) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState::new(admin_password, seed));

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
