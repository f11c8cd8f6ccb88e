/// Errors reported by the windowing engine.
///
/// The engine never clamps nonsensical configuration on its own: a negative item count or a
/// zero row height is reported back so the caller can decide what to render instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// A scalar input is outside its domain.
    #[error("invalid argument `{name}` = {value}: {constraint}")]
    InvalidArgument {
        name: &'static str,
        value: i64,
        constraint: &'static str,
    },
}

impl WindowError {
    pub(crate) fn invalid(name: &'static str, value: i64, constraint: &'static str) -> Self {
        Self::InvalidArgument {
            name,
            value,
            constraint,
        }
    }
}
