use std::collections::HashMap;

/// Estado genérico de formulario: valores de campos, envío en curso y
/// desenlace terminal. Lo usan todas las pantallas de entrada.
///
/// Invariantes:
/// - `error` y `success` son mutuamente excluyentes
/// - `submitting` cubre exactamente una mutación en vuelo
/// - editar un campo devuelve el formulario a idle (limpia el desenlace)
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FormState {
    fields: HashMap<String, String>,
    submitting: bool,
    error: Option<String>,
    success: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_string(), value.into());
        self.error = None;
        self.success = None;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// Arranca un envío; devuelve false si ya hay uno en curso
    /// (doble click = no-op). Limpia el desenlace anterior.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.error = None;
        self.success = None;
        true
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.error = Some(message.into());
        self.success = None;
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn clear_fields(&mut self) {
        self.fields.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_submit_is_a_noop() {
        let mut form = FormState::new();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        assert!(form.is_submitting());
    }

    #[test]
    fn begin_submit_clears_previous_outcome() {
        let mut form = FormState::new();
        form.fail("boom");
        assert!(form.begin_submit());
        assert!(form.error().is_none());
        assert!(form.success().is_none());
    }

    #[test]
    fn outcome_is_mutually_exclusive() {
        let mut form = FormState::new();
        form.begin_submit();
        form.fail("bad cost");
        assert_eq!(form.error(), Some("bad cost"));
        assert!(form.success().is_none());
        assert!(!form.is_submitting());

        form.begin_submit();
        form.succeed("ok");
        assert_eq!(form.success(), Some("ok"));
        assert!(form.error().is_none());
        assert!(!form.is_submitting());
    }

    #[test]
    fn failure_keeps_field_values() {
        let mut form = FormState::new();
        form.set_field("name", "Obra 12");
        form.set_field("total_cost", "12.5");
        form.begin_submit();
        form.fail("bad cost");

        assert_eq!(form.field("name"), "Obra 12");
        assert_eq!(form.field("total_cost"), "12.5");
        assert!(!form.is_submitting());
    }

    #[test]
    fn editing_returns_form_to_idle() {
        let mut form = FormState::new();
        form.begin_submit();
        form.succeed("done");
        form.set_field("name", "otra");
        assert!(form.error().is_none());
        assert!(form.success().is_none());
    }

    #[test]
    fn success_with_cleared_fields_resets_draft() {
        let mut form = FormState::new();
        form.set_field("name", "x");
        form.set_field("quotation_details", r#"{"a":1}"#);
        form.set_field("total_cost", "12.5");
        form.begin_submit();
        form.succeed("Quotation added successfully!");
        form.clear_fields();

        assert_eq!(form.field("name"), "");
        assert_eq!(form.field("quotation_details"), "");
        assert_eq!(form.field("total_cost"), "");
        assert!(form.success().is_some());
        assert!(form.error().is_none());
    }
}
