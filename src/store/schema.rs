//! JSON Schema validation for the quiz store file

use crate::error::QuizError;
use jsonschema::Validator;
use serde_json::Value;

/// Get the embedded JSON schema for the store file
///
/// # Errors
///
/// Returns an error if the embedded schema does not parse or compile
pub fn get_schema() -> Result<Validator, QuizError> {
    let schema_str = include_str!("../../docs/quizzes.schema.json");
    let schema: Value = serde_json::from_str(schema_str)
        .map_err(|e| QuizError::storage(format!("Failed to parse embedded JSON schema: {e}")))?;

    jsonschema::draft7::new(&schema)
        .map_err(|e| QuizError::storage(format!("Failed to compile JSON schema: {e}")))
}

/// Validate a store document against the schema
///
/// # Errors
///
/// Returns [`QuizError::Storage`] listing every schema violation
pub fn validate_against_schema(document: &Value) -> Result<(), QuizError> {
    let schema = get_schema()?;

    let error_messages: Vec<String> = schema
        .iter_errors(document)
        .map(|e| format!("  - {e}"))
        .collect();

    if !error_messages.is_empty() {
        return Err(QuizError::storage(format!(
            "Store file validation failed:\n{}",
            error_messages.join("\n")
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_document_passes() {
        let document = json!({
            "quizzes": [{ "id": 1, "question": "2+2?", "answer": "4" }]
        });
        assert!(validate_against_schema(&document).is_ok());
    }

    #[test]
    fn missing_answer_fails() {
        let document = json!({ "quizzes": [{ "id": 1, "question": "2+2?" }] });
        assert!(validate_against_schema(&document).is_err());
    }

    #[test]
    fn negative_id_fails() {
        let document = json!({
            "quizzes": [{ "id": -3, "question": "2+2?", "answer": "4" }]
        });
        assert!(validate_against_schema(&document).is_err());
    }

    #[test]
    fn id_beyond_u32_fails() {
        let document = json!({
            "quizzes": [{ "id": 4_294_967_296_u64, "question": "2+2?", "answer": "4" }]
        });
        assert!(validate_against_schema(&document).is_err());

        let document = json!({
            "quizzes": [{ "id": 4_294_967_295_u64, "question": "2+2?", "answer": "4" }]
        });
        assert!(validate_against_schema(&document).is_ok());
    }
}
