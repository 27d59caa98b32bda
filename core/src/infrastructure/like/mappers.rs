use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::Value;

use crate::domain::{common::entities::app_errors::CoreError, like::entities::LikeRecord};

/// Maps a `LikeRecord` to a DynamoDB item keyed by the persisted attribute
/// names. Absent optional fields become NULL attributes, matching the
/// document mapping the table was written with historically.
pub fn record_to_item(record: &LikeRecord) -> Result<HashMap<String, AttributeValue>, CoreError> {
    let value = serde_json::to_value(record)
        .map_err(|e| CoreError::Store(format!("failed to serialize like record: {e}")))?;

    match value {
        Value::Object(fields) => Ok(fields
            .into_iter()
            .map(|(name, field)| (name, to_attribute_value(field)))
            .collect()),
        _ => Err(CoreError::Store(
            "like record did not serialize to a mapping".to_string(),
        )),
    }
}

/// Document-style JSON to DynamoDB attribute conversion.
pub fn to_attribute_value(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(items) => {
            AttributeValue::L(items.into_iter().map(to_attribute_value).collect())
        }
        Value::Object(fields) => AttributeValue::M(
            fields
                .into_iter()
                .map(|(name, field)| (name, to_attribute_value(field)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;
    use serde_json::json;

    use super::*;
    use crate::domain::like::value_objects::SaveLikeCommand;

    fn record() -> LikeRecord {
        LikeRecord::new(
            SaveLikeCommand {
                user_id: "u123".to_string(),
                meal_id: "m456".to_string(),
                meal_name: None,
                image_url: Some("https://ex/img.jpg".to_string()),
                ingredients: vec![json!("rice"), json!({ "name": "egg", "count": 2 })],
                source: "themealdb".to_string(),
            },
            Utc.with_ymd_and_hms(2025, 8, 8, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_record_to_item_key_attributes() {
        let item = record_to_item(&record()).unwrap();

        assert_eq!(item["PK"], AttributeValue::S("USER#u123".to_string()));
        assert_eq!(item["SK"], AttributeValue::S("LIKE#m456".to_string()));
        assert_eq!(item["GSI1PK"], AttributeValue::S("MEAL#m456".to_string()));
        assert_eq!(item["GSI1SK"], AttributeValue::S("USER#u123".to_string()));
        assert_eq!(item["GSI2PK"], AttributeValue::S("USER#u123".to_string()));
        assert_eq!(
            item["GSI2SK"],
            AttributeValue::S("2025-08-08T12:00:00Z#LIKE#m456".to_string())
        );
    }

    #[test]
    fn test_record_to_item_absent_optional_is_null_attribute() {
        let item = record_to_item(&record()).unwrap();
        assert_eq!(item["mealName"], AttributeValue::Null(true));
        assert_eq!(
            item["imageUrl"],
            AttributeValue::S("https://ex/img.jpg".to_string())
        );
    }

    #[test]
    fn test_record_to_item_ingredient_list_shapes() {
        let item = record_to_item(&record()).unwrap();
        let AttributeValue::L(items) = &item["ingredients"] else {
            panic!("ingredients should map to a list attribute");
        };
        assert_eq!(items[0], AttributeValue::S("rice".to_string()));
        let AttributeValue::M(fields) = &items[1] else {
            panic!("object ingredient should map to a map attribute");
        };
        assert_eq!(fields["name"], AttributeValue::S("egg".to_string()));
        assert_eq!(fields["count"], AttributeValue::N("2".to_string()));
    }

    #[test]
    fn test_to_attribute_value_scalars() {
        assert_eq!(to_attribute_value(json!(null)), AttributeValue::Null(true));
        assert_eq!(to_attribute_value(json!(true)), AttributeValue::Bool(true));
        assert_eq!(
            to_attribute_value(json!(1.5)),
            AttributeValue::N("1.5".to_string())
        );
    }
}
