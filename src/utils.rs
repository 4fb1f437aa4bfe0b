use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Declares actix handlers that forward to a same-named `*_impl` function.
///
/// Each entry is `(method, name, "/path", extractor: Type, ...)`; the
/// generated handler always receives the shared `AppState` first.
#[macro_export]
macro_rules! api_funcs {
    ( $( ( $method:ident, $func_name:ident, $url:literal $(, $arg:ident : $ty:ty )* $(,)? ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[$method($url)]
                async fn $func_name(
                    state: web::Data<AppState>,
                    $( $arg: $ty, )*
                ) -> Result<HttpResponse, ApiError> {
                    [<$func_name _impl>](&state, $( $arg ),*).map_err(|err| {
                        $crate::utils::log_api_error(stringify!($func_name), &err);
                        err
                    })
                }
            }
        )+
    };
}

pub fn log_api_error(handler: &str, err: &ApiError) {
    if err.is_internal() {
        tracing::error!(handler, error = %err, "request failed");
    } else {
        tracing::debug!(handler, error = %err, "request rejected");
    }
}

/// `null`, `""`, `0` and `false` count as a missing field.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0),
        _ => false,
    }
}

/// A present field in string form; non-string values keep their JSON text.
pub fn required(field: Option<Value>, msg: &'static str) -> ApiResult<String> {
    match field {
        Some(value) if !is_falsy(&value) => Ok(match value {
            Value::String(s) => s,
            other => other.to_string(),
        }),
        _ => Err(ApiError::Validation(msg)),
    }
}

/// Doctor ids in paths and bodies: leading-integer parse, positive only.
pub fn parse_doctor_id(s: &str) -> Option<u64> {
    parse_leading_int(s).filter(|&id| id > 0).map(|id| id as u64)
}

/// Leading-integer parse: `"12abc"` is 12, `"abc"` is `None`.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or_else(|| digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_fields() {
        assert_eq!(required(Some(json!("x")), "missing").unwrap(), "x");
        assert_eq!(required(Some(json!(555123456)), "missing").unwrap(), "555123456");
        assert_eq!(required(Some(json!(true)), "missing").unwrap(), "true");
        assert!(matches!(
            required(Some(json!("")), "missing"),
            Err(ApiError::Validation("missing"))
        ));
        for falsy in vec![json!(null), json!(0), json!(0.0), json!(false)] {
            assert!(required(Some(falsy), "missing").is_err());
        }
        assert!(required(None, "missing").is_err());
    }

    #[test]
    fn doctor_ids() {
        assert_eq!(parse_doctor_id("2"), Some(2));
        assert_eq!(parse_doctor_id("2abc"), Some(2));
        assert_eq!(parse_doctor_id("0"), None);
        assert_eq!(parse_doctor_id("-3"), None);
        assert_eq!(parse_doctor_id("abc"), None);
    }

    #[test]
    fn leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  7 "), Some(7));
        assert_eq!(parse_leading_int("3rd"), Some(3));
        assert_eq!(parse_leading_int("-2"), Some(-2));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }
}
