//! Error message templates.
//!
//! The built-in default messages are `minijinja` templates rendered with the
//! field name and, for length rules, the configured minimum. Message
//! overrides on a rule are reported as written.

use minijinja::{Environment, context};
use tracing::warn;

/// Default message for the `required` rule.
pub const REQUIRED_MESSAGE: &str = "{{ field }} é obrigatório";

/// Default message for the `email` rule.
pub const EMAIL_MESSAGE: &str = "Email inválido";

/// Default message for the `minLength` rule.
pub const MIN_LENGTH_MESSAGE: &str = "Mínimo {{ min }} caracteres";

/// Default message for the `cpf` rule.
pub const CPF_MESSAGE: &str = "CPF inválido";

/// Default message for the `phone` rule.
pub const PHONE_MESSAGE: &str = "Telefone inválido";

/// Values available to a message template.
#[derive(Debug, Clone, Copy)]
pub struct MessageContext<'a> {
    /// Name of the field being validated.
    pub field: &'a str,
    /// Minimum length for length rules.
    pub min: Option<usize>,
}

/// Renders a message template.
///
/// A template that fails to render yields its raw text so that the message
/// still surfaces as a validation failure.
#[must_use]
pub fn render_message(template: &str, message_context: MessageContext<'_>) -> String {
    if !has_template_syntax(template) {
        return template.to_owned();
    }

    let environment = Environment::new();
    environment
        .render_str(
            template,
            context! {
                field => message_context.field,
                min => message_context.min,
            },
        )
        .unwrap_or_else(|error| {
            warn!(
                field = message_context.field,
                %error,
                "failed to render validation message; using raw text"
            );
            template.to_owned()
        })
}

fn has_template_syntax(template: &str) -> bool {
    template.contains("{{") || template.contains("{%")
}
