use std::borrow::Cow;

/// Errors raised while handling a form event.
///
/// Validation failures are not errors; they are reported through field feedback.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// A snapshot was requested for values that cannot form one.
    #[error("Incomplete submission{}: {message}", format_context(.context))]
    Incomplete { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Serde serialization error with optional context.
    #[error("Serde serialization error{}: {source}", format_context(.context))]
    SerdeSerialize { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

impl From<serde_json::Error> for FormError {
    fn from(source: serde_json::Error) -> Self {
        Self::SerdeSerialize { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
