use schemars::schema_for;

use crate::json::types;

pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(types::JsonDispatchRequest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_names_the_request_fields() {
        let schema = generate_json_schema().unwrap();

        assert!(schema.contains("\"DispatchRequest\""));
        assert!(schema.contains("\"dispatchId\""));
        assert!(schema.contains("\"fromAddressNo\""));
    }
}
