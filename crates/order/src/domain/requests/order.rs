use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// `POST /submit` body exactly as the client sends it. Every field may be
/// absent or null, and no type is enforced here: whatever scalar arrives is
/// forwarded to the database, which coerces it or rejects it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitOrderRequest {
    #[schema(value_type = Option<String>, example = "2024-01-01T00:00:00Z")]
    pub timestamp: Option<Value>,
    #[schema(value_type = Option<String>, example = "Alice")]
    pub user: Option<Value>,
    #[schema(value_type = Option<String>, example = "Beef")]
    pub main_course: Option<Value>,
    #[schema(value_type = Option<i32>, example = 120)]
    pub main_course_price: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub combo: Option<Value>,
    #[schema(value_type = Option<i32>, example = 0)]
    pub combo_price: Option<Value>,
    #[schema(value_type = Option<String>, example = "Tea")]
    pub drink: Option<Value>,
    #[schema(value_type = Option<i32>, example = 30)]
    pub drink_price: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub dessert: Option<Value>,
    #[schema(value_type = Option<i32>, example = 0)]
    pub dessert_price: Option<Value>,
    #[schema(value_type = Option<i32>, example = 150)]
    pub total: Option<Value>,
}

/// The eleven insert parameters in column order. Each travels as text and is
/// cast to its column type by the database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateOrderRecordRequest {
    pub timestamp: Option<String>,
    pub user_name: Option<String>,
    pub main_course: Option<String>,
    pub main_course_price: Option<String>,
    pub combo: Option<String>,
    pub combo_price: Option<String>,
    pub drink: Option<String>,
    pub drink_price: Option<String>,
    pub dessert: Option<String>,
    pub dessert_price: Option<String>,
    pub total: Option<String>,
}

/// Largest magnitude at which every integer is exactly representable as f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    // `120.0` and `1.5e2` are whole numbers; an integer column takes them
    // written without a fraction.
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

fn sql_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(number_text(&n)),
        other => Some(other.to_string()),
    }
}

impl From<SubmitOrderRequest> for CreateOrderRecordRequest {
    fn from(value: SubmitOrderRequest) -> Self {
        CreateOrderRecordRequest {
            timestamp: sql_text(value.timestamp),
            // `user` on the wire, `user_name` in the table
            user_name: sql_text(value.user),
            main_course: sql_text(value.main_course),
            main_course_price: sql_text(value.main_course_price),
            combo: sql_text(value.combo),
            combo_price: sql_text(value.combo_price),
            drink: sql_text(value.drink),
            drink_price: sql_text(value.drink_price),
            dessert: sql_text(value.dessert),
            dessert_price: sql_text(value.dessert_price),
            total: sql_text(value.total),
        }
    }
}

/// Typed view of a submission, used when strict validation is switched on.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct StrictOrderRequest {
    #[validate(required, length(min = 1, max = 255))]
    pub timestamp: Option<String>,
    #[validate(required, length(min = 1, max = 255))]
    pub user: Option<String>,
    #[validate(length(max = 255))]
    pub main_course: Option<String>,
    #[validate(range(min = 0))]
    pub main_course_price: Option<i32>,
    #[validate(length(max = 255))]
    pub combo: Option<String>,
    #[validate(range(min = 0))]
    pub combo_price: Option<i32>,
    #[validate(length(max = 255))]
    pub drink: Option<String>,
    #[validate(range(min = 0))]
    pub drink_price: Option<i32>,
    #[validate(length(max = 255))]
    pub dessert: Option<String>,
    #[validate(range(min = 0))]
    pub dessert_price: Option<i32>,
    #[validate(required, range(min = 0))]
    pub total: Option<i32>,
}

impl StrictOrderRequest {
    /// Runs the field rules and returns one message per failure, sorted by
    /// field so the output is stable.
    pub fn check(&self) -> Result<(), Vec<String>> {
        self.validate().map_err(|errors| validation_messages(&errors))
    }
}

impl TryFrom<&SubmitOrderRequest> for StrictOrderRequest {
    type Error = Vec<String>;

    fn try_from(value: &SubmitOrderRequest) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        let mut text = |name: &str, field: &Option<Value>| match field {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                errors.push(format!("{name}: expected a string"));
                None
            }
        };

        let timestamp = text("timestamp", &value.timestamp);
        let user = text("user", &value.user);
        let main_course = text("mainCourse", &value.main_course);
        let combo = text("combo", &value.combo);
        let drink = text("drink", &value.drink);
        let dessert = text("dessert", &value.dessert);

        let mut int = |name: &str, field: &Option<Value>| match field {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => match n.as_i64().map(i32::try_from) {
                Some(Ok(v)) => Some(v),
                _ => {
                    errors.push(format!("{name}: expected a 32-bit integer"));
                    None
                }
            },
            Some(_) => {
                errors.push(format!("{name}: expected an integer"));
                None
            }
        };

        let main_course_price = int("mainCoursePrice", &value.main_course_price);
        let combo_price = int("comboPrice", &value.combo_price);
        let drink_price = int("drinkPrice", &value.drink_price);
        let dessert_price = int("dessertPrice", &value.dessert_price);
        let total = int("total", &value.total);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            timestamp,
            user,
            main_course,
            main_course_price,
            combo,
            combo_price,
            drink,
            drink_price,
            dessert,
            dessert_price,
            total,
        })
    }
}

impl From<StrictOrderRequest> for CreateOrderRecordRequest {
    fn from(value: StrictOrderRequest) -> Self {
        let int = |v: Option<i32>| v.map(|n| n.to_string());

        CreateOrderRecordRequest {
            timestamp: value.timestamp,
            user_name: value.user,
            main_course: value.main_course,
            main_course_price: int(value.main_course_price),
            combo: value.combo,
            combo_price: int(value.combo_price),
            drink: value.drink,
            drink_price: int(value.drink_price),
            dessert: value.dessert,
            dessert_price: int(value.dessert_price),
            total: int(value.total),
        }
    }
}

fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let name = wire_name(&field);
            field_errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| match error.code.as_ref() {
                        "required" => "is required".to_string(),
                        "length" => "must be between 1 and 255 characters".to_string(),
                        "range" => "must not be negative".to_string(),
                        code => format!("failed {code} check"),
                    });
                format!("{name}: {message}")
            })
        })
        .collect();

    messages.sort();
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alice() -> SubmitOrderRequest {
        serde_json::from_value(json!({
            "timestamp": "2024-01-01T00:00:00Z",
            "user": "Alice",
            "mainCourse": "Beef",
            "mainCoursePrice": 120,
            "combo": null,
            "comboPrice": 0,
            "drink": "Tea",
            "drinkPrice": 30,
            "dessert": null,
            "dessertPrice": 0,
            "total": 150
        }))
        .unwrap()
    }

    #[test]
    fn passthrough_maps_user_to_user_name_and_stringifies_scalars() {
        let record = CreateOrderRecordRequest::from(alice());

        assert_eq!(record.user_name.as_deref(), Some("Alice"));
        assert_eq!(record.main_course_price.as_deref(), Some("120"));
        assert_eq!(record.combo, None);
        assert_eq!(record.combo_price.as_deref(), Some("0"));
        assert_eq!(record.total.as_deref(), Some("150"));
    }

    #[test]
    fn absent_fields_become_null() {
        let body: SubmitOrderRequest =
            serde_json::from_value(json!({ "user": "Bob", "total": 80 })).unwrap();
        let record = CreateOrderRecordRequest::from(body);

        assert_eq!(record.user_name.as_deref(), Some("Bob"));
        assert_eq!(record.dessert, None);
        assert_eq!(record.dessert_price, None);
        assert_eq!(record.timestamp, None);
    }

    #[test]
    fn passthrough_keeps_poorly_typed_values_for_the_database_to_judge() {
        let body: SubmitOrderRequest =
            serde_json::from_value(json!({ "mainCoursePrice": "abc", "total": -5 })).unwrap();
        let record = CreateOrderRecordRequest::from(body);

        assert_eq!(record.main_course_price.as_deref(), Some("abc"));
        assert_eq!(record.total.as_deref(), Some("-5"));
    }

    #[test]
    fn whole_floats_are_written_as_integers() {
        let body: SubmitOrderRequest = serde_json::from_value(json!({
            "mainCoursePrice": 120.0,
            "drinkPrice": -30.0,
            "dessertPrice": 150.5,
            "total": 1.5e2
        }))
        .unwrap();
        let record = CreateOrderRecordRequest::from(body);

        assert_eq!(record.main_course_price.as_deref(), Some("120"));
        assert_eq!(record.drink_price.as_deref(), Some("-30"));
        assert_eq!(record.dessert_price.as_deref(), Some("150.5"));
        assert_eq!(record.total.as_deref(), Some("150"));
    }

    #[test]
    fn strict_accepts_a_well_formed_order() {
        let strict = StrictOrderRequest::try_from(&alice()).unwrap();
        assert!(strict.check().is_ok());

        let record = CreateOrderRecordRequest::from(strict);
        assert_eq!(record, CreateOrderRecordRequest::from(alice()));
    }

    #[test]
    fn strict_reports_type_mismatches_with_wire_names() {
        let body: SubmitOrderRequest = serde_json::from_value(json!({
            "user": 42,
            "mainCoursePrice": "120",
            "total": 1.5
        }))
        .unwrap();

        let errors = StrictOrderRequest::try_from(&body).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "user: expected a string".to_string(),
                "mainCoursePrice: expected an integer".to_string(),
                "total: expected a 32-bit integer".to_string(),
            ]
        );
    }

    #[test]
    fn strict_rules_flag_missing_user_and_negative_prices() {
        let mut body = alice();
        body.user = None;
        body.drink_price = Some(json!(-30));

        let errors = StrictOrderRequest::try_from(&body)
            .unwrap()
            .check()
            .unwrap_err();

        assert_eq!(
            errors,
            vec![
                "drinkPrice: must not be negative".to_string(),
                "user: is required".to_string(),
            ]
        );
    }

    #[test]
    fn wire_name_converts_snake_case() {
        assert_eq!(wire_name("main_course_price"), "mainCoursePrice");
        assert_eq!(wire_name("user"), "user");
    }
}
