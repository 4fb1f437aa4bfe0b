use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::store::Record;

#[derive(Clone, Debug, Serialize)]
pub struct Appointment {
    pub id: u64,
    pub doctor_id: u64,
    pub patient_name: String,
    pub patient_phone: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Record for Appointment {
    fn id(&self) -> u64 {
        self.id
    }
}

pub const APPOINT_STATUS_CONFIRMED: &str = "confirmed";
