use serde::Deserialize;
use serde_json::Value;

use crate::utils::{is_falsy, parse_doctor_id};

/// `doctor_id` as clients send it: a number, a numeric string, or junk.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DoctorRef {
    Int(i64),
    Float(f64),
    Text(String),
    Other(Value),
}

impl DoctorRef {
    /// `0`, `""`, `false` and NaN count as a missing field.
    pub fn is_falsy(&self) -> bool {
        match self {
            DoctorRef::Int(n) => *n == 0,
            DoctorRef::Float(f) => *f == 0.0 || f.is_nan(),
            DoctorRef::Text(s) => s.is_empty(),
            DoctorRef::Other(v) => is_falsy(v),
        }
    }

    /// The doctor id this refers to, if it can name one at all.
    pub fn to_id(&self) -> Option<u64> {
        let id = match self {
            DoctorRef::Int(n) => *n,
            DoctorRef::Float(f) if f.is_finite() => f.trunc() as i64,
            DoctorRef::Text(s) => return parse_doctor_id(s),
            _ => return None,
        };
        if id > 0 {
            Some(id as u64)
        } else {
            None
        }
    }
}

#[derive(Deserialize)]
pub struct AppointRequest {
    pub doctor_id: Option<DoctorRef>,
    pub patient_name: Option<Value>,
    pub patient_phone: Option<Value>,
    pub appointment_date: Option<Value>,
    pub appointment_time: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doctor_ref(v: Value) -> DoctorRef {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn numeric_and_string_ids() {
        assert_eq!(doctor_ref(json!(3)).to_id(), Some(3));
        assert_eq!(doctor_ref(json!("3")).to_id(), Some(3));
        assert_eq!(doctor_ref(json!("12abc")).to_id(), Some(12));
        assert_eq!(doctor_ref(json!(2.7)).to_id(), Some(2));
        assert_eq!(doctor_ref(json!("abc")).to_id(), None);
        assert_eq!(doctor_ref(json!(-4)).to_id(), None);
        assert_eq!(doctor_ref(json!(true)).to_id(), None);
    }

    #[test]
    fn falsy_values() {
        assert!(doctor_ref(json!(0)).is_falsy());
        assert!(doctor_ref(json!("")).is_falsy());
        assert!(doctor_ref(json!(false)).is_falsy());
        assert!(!doctor_ref(json!("0")).is_falsy());
        assert!(!doctor_ref(json!(1)).is_falsy());
    }

    #[test]
    fn missing_and_null_fields_deserialize_to_none() {
        let req: AppointRequest =
            serde_json::from_value(json!({ "doctor_id": null, "patient_name": "Ali" })).unwrap();
        assert!(req.doctor_id.is_none());
        assert_eq!(req.patient_name, Some(json!("Ali")));
        assert!(req.patient_phone.is_none());
    }
}
