use serde_json::Value;

// Embed schemas at compile time
const CHART_SCHEMA: &str = include_str!("../../schemas/chart-schema.json");

pub fn get_chart_schema() -> Result<Value, serde_json::Error> {
    serde_json::from_str(CHART_SCHEMA)
}
