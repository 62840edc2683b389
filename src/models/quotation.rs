use serde::{Deserialize, Serialize};

use crate::utils::validation::{parse_quotation_details, parse_total_cost};

/// Borrador de cotización tal y como lo teclea el usuario (todo crudo).
/// Se crea vacío al montar la pantalla, se vacía tras un envío exitoso.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct QuotationDraft {
    pub name: String,
    pub quotation_details: String,
    pub total_cost: String,
}

impl QuotationDraft {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.quotation_details.is_empty() && self.total_cost.is_empty()
    }

    /// Valida el borrador completo y lo convierte en payload de envío.
    /// Se ejecuta en el submit como defensa contra deriva de estado,
    /// además de la validación inline por pulsación.
    pub fn validate(&self) -> Result<NewQuotationRequest, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Quotation name is required.".to_string());
        }

        let quotation_details = parse_quotation_details(&self.quotation_details)?;
        let total_cost = parse_total_cost(&self.total_cost)?;

        Ok(NewQuotationRequest {
            name: name.to_string(),
            quotation_details,
            total_cost,
        })
    }
}

/// Payload que espera la API de cotizaciones
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewQuotationRequest {
    pub name: String,
    pub quotation_details: serde_json::Value,
    pub total_cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, details: &str, cost: &str) -> QuotationDraft {
        QuotationDraft {
            name: name.to_string(),
            quotation_details: details.to_string(),
            total_cost: cost.to_string(),
        }
    }

    #[test]
    fn valid_draft_builds_typed_payload() {
        let request = draft("Obra 12", r#"{"a":1}"#, "12.5").validate().unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["name"], "Obra 12");
        assert_eq!(json["quotation_details"]["a"], 1);
        assert_eq!(json["total_cost"], 12.5);
    }

    #[test]
    fn malformed_details_are_rejected() {
        assert!(draft("x", "{invalid", "10").validate().is_err());
    }

    #[test]
    fn scalar_details_are_rejected() {
        // Un escalar es JSON válido pero no es un registro anidado
        assert!(draft("x", "42", "10").validate().is_err());
    }

    #[test]
    fn non_numeric_cost_is_rejected() {
        assert!(draft("x", r#"{"a":1}"#, "abc").validate().is_err());
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(draft("   ", r#"{"a":1}"#, "10").validate().is_err());
    }

    #[test]
    fn new_draft_is_empty() {
        assert!(QuotationDraft::default().is_empty());
        assert!(!draft("x", "", "").is_empty());
    }
}
