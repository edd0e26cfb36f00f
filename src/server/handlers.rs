use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::catalog::PointOfInterest;
use crate::geo::Coordinate;
use crate::location::{FixedPosition, PermissionStatus, Position};
use crate::maps::MapLinks;
use crate::ranker::{RankError, RankedPoint};
use crate::region::{group_by_region, Region, RegionGroup};

use super::state::AppState;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

impl From<RankError> for ApiError {
    fn from(e: RankError) -> Self {
        api_error(StatusCode::BAD_REQUEST, e.to_string())
    }
}

// ─── GET /api/churches ───────────────────────────────────────────

#[derive(Serialize)]
pub struct DirectoryResponse<'a> {
    pub total: usize,
    pub regions: Vec<RegionGroup<'a>>,
}

pub async fn directory(State(state): State<Arc<AppState>>) -> Response {
    let points = state.catalog.points();
    Json(DirectoryResponse {
        total: points.len(),
        regions: group_by_region(points),
    })
    .into_response()
}

// ─── GET /api/churches/{id} ──────────────────────────────────────

#[derive(Serialize)]
pub struct ChurchResponse<'a> {
    #[serde(flatten)]
    pub point: &'a PointOfInterest,
    pub region: &'static str,
    pub links: MapLinks,
}

pub async fn church(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let point = state
        .catalog
        .get(id)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, format!("No church with id {}", id)))?;

    Ok(Json(ChurchResponse {
        point,
        region: Region::classify(&point.address).label(),
        links: MapLinks::for_point(point),
    })
    .into_response())
}

// ─── GET /api/nearest ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct NearestQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub limit: Option<i64>,
}

#[derive(Serialize)]
pub struct NearestItem<'a> {
    #[serde(flatten)]
    pub point: &'a PointOfInterest,
    pub distance_km: f64,
    pub distance: String,
    pub links: MapLinks,
}

impl<'a> From<RankedPoint<'a>> for NearestItem<'a> {
    fn from(r: RankedPoint<'a>) -> Self {
        Self {
            point: r.point,
            distance_km: r.distance_km,
            distance: r.formatted_distance(),
            links: MapLinks::for_point(r.point),
        }
    }
}

#[derive(Serialize)]
pub struct NearestResponse<'a> {
    pub origin: Position,
    pub results: Vec<NearestItem<'a>>,
}

pub async fn nearest(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NearestQuery>,
) -> Result<Response, ApiError> {
    let origin = match (params.lat, params.lon) {
        (Some(lat), Some(lon)) => {
            let coordinate = Coordinate::new(lat, lon);
            if !coordinate.is_valid() {
                return Err(api_error(
                    StatusCode::BAD_REQUEST,
                    "Invalid coordinates. Lat: -90..90, Lon: -180..180",
                ));
            }
            state.resolver.locate(&mut FixedPosition(coordinate))
        }
        (None, None) => state.resolver.fallback_position(PermissionStatus::Undetermined),
        _ => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "Both 'lat' and 'lon' are required",
            ))
        }
    };

    let limit = params.limit.unwrap_or(state.default_limit);
    let ranked = state.catalog.nearest(&origin.coordinate, Some(limit))?;

    info!(
        origin = %origin.coordinate,
        source = %origin.source,
        results = ranked.len(),
        "GET /api/nearest"
    );

    let results = ranked.into_iter().map(NearestItem::from).collect();

    Ok(Json(NearestResponse { origin, results }).into_response())
}
