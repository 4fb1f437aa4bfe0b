mod requests;

use crate::{
    error::{ApiError, ApiResult, MSG_DOCTOR_NOT_FOUND},
    models::doctors::DoctorFilter,
    state::AppState,
    store::assert,
    utils::parse_doctor_id,
};
use actix_web::{get, web, HttpResponse};

use self::requests::SearchDoctorQuery;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(search_doctor).service(view_doctor);
}

crate::api_funcs! {
    (get, search_doctor, "/doctors", query: web::Query<Vec<(String, String)>>),
    (get, view_doctor, "/doctors/{id}", path: web::Path<String>),
}

fn search_doctor_impl(
    state: &AppState,
    query: web::Query<Vec<(String, String)>>,
) -> ApiResult<HttpResponse> {
    let query = SearchDoctorQuery::from_pairs(query.into_inner());
    let filter = DoctorFilter {
        search: query.search.as_deref(),
        specialty: query.specialty.as_deref(),
        city: query.city.as_deref(),
    };

    let doctors = state
        .doctors
        .list()?
        .into_iter()
        .filter(|doctor| filter.matches(doctor))
        .collect::<Vec<_>>();

    Ok(HttpResponse::Ok().json(doctors))
}

fn view_doctor_impl(state: &AppState, path: web::Path<String>) -> ApiResult<HttpResponse> {
    let id = parse_doctor_id(&path).ok_or(ApiError::NotFound(MSG_DOCTOR_NOT_FOUND))?;
    let doctor = assert::assert_doctor(state, id)?;

    Ok(HttpResponse::Ok().json(doctor))
}
