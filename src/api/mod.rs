use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::TidewatchError;
use crate::engine::{RoomSummary, WeatherEngine};
use crate::room::Looker;
use crate::time_period::TimePeriod;
use crate::weather::WeatherSnapshot;

type ApiState = Arc<WeatherEngine>;

#[derive(Serialize, Deserialize)]
pub struct ApiTime {
    pub period: TimePeriod,
    pub coarse: String,
}

#[derive(Serialize, Deserialize)]
pub struct ApiWeather {
    pub location: String,
    pub summary: String,
    pub snapshot: WeatherSnapshot,
}

#[derive(Serialize, Deserialize)]
pub struct ApiText {
    pub room: String,
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LookQuery {
    pub looker: Option<String>,
    #[serde(default)]
    pub brief: bool,
}

/// Error body returned by every route
#[derive(Serialize)]
struct ApiError {
    error: String,
}

impl IntoResponse for TidewatchError {
    fn into_response(self) -> Response {
        let status = match &self {
            TidewatchError::UnknownRoom { .. }
            | TidewatchError::UnknownWindow { .. }
            | TidewatchError::UnknownLocation { .. } => StatusCode::NOT_FOUND,
            TidewatchError::NotWeatherAware { .. } => StatusCode::CONFLICT,
            _ => {
                warn!("Request failed: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ApiError {
            error: self.user_message(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/time", get(get_time))
        .route("/weather/{location}", get(get_weather))
        .route("/rooms", get(get_rooms))
        .route("/rooms/{id}", get(get_room))
        .route("/rooms/{id}/windows/{window}", get(get_window))
        .route("/rooms/{id}/regen", post(regen_room))
}

async fn get_time(State(engine): State<ApiState>) -> Json<ApiTime> {
    let period = engine.get_time_period();
    Json(ApiTime {
        period,
        coarse: period.coarse().as_str().to_string(),
    })
}

async fn get_weather(
    State(engine): State<ApiState>,
    Path(location): Path<String>,
) -> Result<Json<ApiWeather>, TidewatchError> {
    if !engine.store().is_tracked(&location) {
        return Err(TidewatchError::unknown_location(location));
    }
    let snapshot = engine.get_weather_data(&location);
    Ok(Json(ApiWeather {
        summary: snapshot.describe(),
        snapshot: snapshot.as_ref().clone(),
        location,
    }))
}

async fn get_rooms(State(engine): State<ApiState>) -> Json<Vec<RoomSummary>> {
    Json(engine.room_summaries())
}

async fn get_room(
    State(engine): State<ApiState>,
    Path(id): Path<String>,
    Query(query): Query<LookQuery>,
) -> Result<Json<ApiText>, TidewatchError> {
    let looker = Looker::new(query.looker.unwrap_or_else(|| "admin".to_string())).brief(query.brief);
    let text = engine.render_room_description(&id, &looker)?;
    Ok(Json(ApiText { room: id, text }))
}

async fn get_window(
    State(engine): State<ApiState>,
    Path((id, window)): Path<(String, String)>,
) -> Result<Json<ApiText>, TidewatchError> {
    let text = engine.look_window(&id, &window)?;
    Ok(Json(ApiText { room: id, text }))
}

async fn regen_room(
    State(engine): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<ApiText>, TidewatchError> {
    let text = engine.force_regenerate(&id)?;
    Ok(Json(ApiText { room: id, text }))
}
