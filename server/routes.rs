use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use subway_graph::models::{Distance, LineId, StationId};
use subway_graph::services::{find_line, LineService, SectionService, StationService};
use subway_graph::storage::{LineDao, StationDao};
use subway_graph::SubwayError;
use crate::error::ApiError;
use crate::state::AppState;

type ApiResult = Result<HttpResponse, ApiError>;

#[derive(Debug, Deserialize)]
struct StationRequest {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LineRequest {
    name: String,
    color: String,
    up_station_id: u64,
    down_station_id: u64,
    distance: u32,
}

#[derive(Debug, Deserialize)]
struct LineUpdateRequest {
    name: String,
    color: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SectionRequest {
    up_station_id: u64,
    down_station_id: u64,
    distance: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StationQuery {
    station_id: u64,
}

/// Register every route and the extractor configs
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError(SubwayError::validation(err.to_string())).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError(SubwayError::validation(err.to_string())).into()),
    )
    .service(
        web::resource("/stations")
            .route(web::post().to(create_station))
            .route(web::get().to(list_stations)),
    )
    .service(web::resource("/stations/{id}").route(web::delete().to(delete_station)))
    .service(
        web::resource("/lines")
            .route(web::post().to(create_line))
            .route(web::get().to(list_lines)),
    )
    .service(
        web::resource("/lines/{id}")
            .route(web::get().to(show_line))
            .route(web::put().to(update_line))
            .route(web::delete().to(delete_line))
            .route(web::post().to(create_section)),
    )
    .service(web::resource("/lines/{id}/sections").route(web::delete().to(delete_section_station)));
}

async fn create_station(state: web::Data<AppState>, body: web::Json<StationRequest>) -> ApiResult {
    let station = state.write(|storage| StationService::new(storage).create(&body.name))?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/stations/{}", station.id)))
        .json(station))
}

async fn list_stations(state: web::Data<AppState>) -> ApiResult {
    let stations = state.read(|storage| storage.find_all_stations())?;
    Ok(HttpResponse::Ok().json(stations))
}

async fn delete_station(state: web::Data<AppState>, path: web::Path<u64>) -> ApiResult {
    let id = StationId(path.into_inner());
    state.write(|storage| StationService::new(storage).delete(id))?;
    Ok(HttpResponse::NoContent().finish())
}

async fn create_line(state: web::Data<AppState>, body: web::Json<LineRequest>) -> ApiResult {
    let distance = Distance::new(body.distance)?;
    let line = state.write(|storage| {
        LineService::new(storage).create(
            &body.name,
            &body.color,
            StationId(body.up_station_id),
            StationId(body.down_station_id),
            distance,
        )
    })?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/lines/{}", line.line.id)))
        .json(line))
}

async fn list_lines(state: web::Data<AppState>) -> ApiResult {
    let lines = state.read(|storage| storage.find_all_lines())?;
    Ok(HttpResponse::Ok().json(lines))
}

async fn show_line(state: web::Data<AppState>, path: web::Path<u64>) -> ApiResult {
    let id = LineId(path.into_inner());
    let line = state.read(|storage| find_line(storage, id))?;
    Ok(HttpResponse::Ok().json(line))
}

async fn update_line(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    body: web::Json<LineUpdateRequest>,
) -> ApiResult {
    let id = LineId(path.into_inner());
    let line = state.write(|storage| LineService::new(storage).update(id, &body.name, &body.color))?;
    Ok(HttpResponse::Ok().json(line))
}

async fn delete_line(state: web::Data<AppState>, path: web::Path<u64>) -> ApiResult {
    let id = LineId(path.into_inner());
    state.write(|storage| LineService::new(storage).delete(id))?;
    Ok(HttpResponse::NoContent().finish())
}

async fn create_section(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    body: web::Json<SectionRequest>,
) -> ApiResult {
    let line_id = LineId(path.into_inner());
    let distance = Distance::new(body.distance)?;
    let section = state.write(|storage| {
        SectionService::new(storage).create(
            line_id,
            StationId(body.up_station_id),
            StationId(body.down_station_id),
            distance,
        )
    })?;

    let section_id = section.id.map(|id| id.to_string()).unwrap_or_default();
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/lines/{line_id}/{section_id}")))
        .json(section))
}

async fn delete_section_station(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    query: web::Query<StationQuery>,
) -> ApiResult {
    let line_id = LineId(path.into_inner());
    let station = StationId(query.station_id);
    state.write(|storage| SectionService::new(storage).delete_station(line_id, station))?;
    Ok(HttpResponse::NoContent().finish())
}
