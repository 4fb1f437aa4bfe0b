mod requests;

use crate::{
    error::{ApiError, ApiResult, MSG_DOCTOR_NOT_FOUND, MSG_FIELDS_REQUIRED},
    models::appointments::{Appointment, APPOINT_STATUS_CONFIRMED},
    state::AppState,
    store::assert,
    utils::required,
};
use actix_web::{get, post, web, HttpResponse};
use chrono::Utc;

use self::requests::AppointRequest;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(appoint).service(search_appoint);
}

crate::api_funcs! {
    (post, appoint, "/appointments", info: web::Json<AppointRequest>),
    (get, search_appoint, "/appointments"),
}

fn appoint_impl(state: &AppState, info: web::Json<AppointRequest>) -> ApiResult<HttpResponse> {
    let info = info.into_inner();

    let doctor_ref = info
        .doctor_id
        .filter(|doctor_ref| !doctor_ref.is_falsy())
        .ok_or(ApiError::Validation(MSG_FIELDS_REQUIRED))?;
    let patient_name = required(info.patient_name, MSG_FIELDS_REQUIRED)?;
    let patient_phone = required(info.patient_phone, MSG_FIELDS_REQUIRED)?;
    let appointment_date = required(info.appointment_date, MSG_FIELDS_REQUIRED)?;
    let appointment_time = required(info.appointment_time, MSG_FIELDS_REQUIRED)?;

    let doctor_id = doctor_ref
        .to_id()
        .ok_or(ApiError::NotFound(MSG_DOCTOR_NOT_FOUND))?;
    assert::assert_doctor(state, doctor_id)?;

    let appointment = state.appointments.append(Box::new(move |id| Appointment {
        id,
        doctor_id,
        patient_name,
        patient_phone,
        appointment_date,
        appointment_time,
        status: APPOINT_STATUS_CONFIRMED.to_string(),
        created_at: Utc::now(),
    }))?;

    tracing::info!(
        id = appointment.id,
        doctor_id,
        date = %appointment.appointment_date,
        time = %appointment.appointment_time,
        "appointment booked"
    );

    Ok(HttpResponse::Created().json(appointment))
}

fn search_appoint_impl(state: &AppState) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.appointments.list()?))
}
