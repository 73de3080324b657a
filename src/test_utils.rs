//! Shared proptest strategies for unit tests.

use chrono::{DateTime, NaiveDate, Utc};
use proptest::prelude::*;

use crate::FieldValue;

/// Timestamps between 1970 and roughly 2100, with millisecond resolution.
pub fn arb_timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_102_444_800_000).prop_filter_map("out of range", DateTime::from_timestamp_millis)
}

/// Calendar dates between 1970 and roughly 2100.
pub fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i32..47_000).prop_filter_map("out of range", |days| {
        NaiveDate::from_ymd_opt(1970, 1, 1)
            .and_then(|epoch| epoch.checked_add_days(chrono::Days::new(days as u64)))
    })
}

/// Any field value. JSON values are always arrays so they take the
/// structured branch of the coercion table.
pub fn arb_field_value() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        Just(FieldValue::Null),
        any::<bool>().prop_map(FieldValue::Bool),
        arb_timestamp().prop_map(FieldValue::Timestamp),
        arb_date().prop_map(FieldValue::Date),
        ".{0,32}".prop_map(FieldValue::Text),
        any::<i64>().prop_map(FieldValue::Int),
        any::<f64>().prop_map(FieldValue::Float),
        prop::collection::vec(any::<i32>(), 0..4)
            .prop_map(|items| FieldValue::Json(serde_json::json!(items))),
    ]
}
