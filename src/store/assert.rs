use crate::{
    error::{ApiError, ApiResult, MSG_DOCTOR_NOT_FOUND},
    models::doctors::Doctor,
    state::AppState,
};

pub fn assert_doctor(state: &AppState, id: u64) -> ApiResult<Doctor> {
    state
        .doctors
        .get_by_id(id)?
        .ok_or(ApiError::NotFound(MSG_DOCTOR_NOT_FOUND))
}
