/// Outcome of one gateway turn.
///
/// Both variants render identically as an assistant message; the wire
/// format erases the tag. The tag exists so logging and tests can tell a
/// genuine answer from a synthesized apology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayReply {
    /// A real answer: local short-circuit, upstream reply, or upload
    /// acknowledgment.
    Answer(String),
    /// Substituted when the upstream call could not be completed.
    Fallback(String),
}

impl GatewayReply {
    pub fn text(&self) -> &str {
        match self {
            Self::Answer(t) | Self::Fallback(t) => t,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Answer(t) | Self::Fallback(t) => t,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}
