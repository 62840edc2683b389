use serde_json::Value;

/// Valida que el coste total sea un decimal finito
pub fn parse_total_cost(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Total cost is required.".to_string());
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err("Total cost must be a valid number.".to_string()),
    }
}

/// Valida que los detalles sean JSON bien formado, y además un registro
/// anidado (objeto o array): un escalar suelto no es una cotización
pub fn parse_quotation_details(raw: &str) -> Result<Value, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Quotation details are required.".to_string());
    }
    let value: Value = serde_json::from_str(trimmed)
        .map_err(|_| "Quotation details must be valid JSON.".to_string())?;
    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        _ => Err("Quotation details must be a JSON object or array.".to_string()),
    }
}

/// Feedback inline por pulsación para el campo de detalles.
/// Un campo aún vacío no reprocha nada; None = sin error que mostrar.
pub fn details_feedback(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }
    parse_quotation_details(raw).err()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_parses_plain_decimals() {
        assert_eq!(parse_total_cost("12.5").unwrap(), 12.5);
        assert_eq!(parse_total_cost("  42 ").unwrap(), 42.0);
        assert_eq!(parse_total_cost("0").unwrap(), 0.0);
    }

    #[test]
    fn cost_rejects_garbage_and_non_finite() {
        assert!(parse_total_cost("").is_err());
        assert!(parse_total_cost("abc").is_err());
        assert!(parse_total_cost("12,5").is_err());
        assert!(parse_total_cost("inf").is_err());
        assert!(parse_total_cost("NaN").is_err());
    }

    #[test]
    fn details_accept_objects_and_arrays() {
        assert!(parse_quotation_details(r#"{"a":1}"#).is_ok());
        assert!(parse_quotation_details(r#"[{"item":"puerta"},{"item":"marco"}]"#).is_ok());
    }

    #[test]
    fn details_reject_malformed_and_scalars() {
        assert!(parse_quotation_details("{invalid").is_err());
        assert!(parse_quotation_details("").is_err());
        assert!(parse_quotation_details("42").is_err());
        assert!(parse_quotation_details(r#""texto""#).is_err());
    }

    #[test]
    fn feedback_stays_quiet_while_empty() {
        assert!(details_feedback("").is_none());
        assert!(details_feedback("   ").is_none());
        assert!(details_feedback(r#"{"a":1}"#).is_none());
        assert!(details_feedback("{invalid").is_some());
    }
}
