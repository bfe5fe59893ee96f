use crate::list::CompletionPolicy;

/// Product variant: same list controller, different skin and completion
/// policy. The variants never interoperate; one is chosen at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Neutral checklist. Toggling is reversible.
    Plain,
    /// Fantasy RPG quest log. Completion is terminal: the item is removed
    /// once its exit transition finishes.
    #[default]
    Quest,
    /// Colorful skin with per-item random accents. Completion is terminal.
    Playful,
}

impl Variant {
    /// Parse a variant name, as used by config and the env override.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Some(Self::Plain),
            "quest" => Some(Self::Quest),
            "playful" => Some(Self::Playful),
            _ => None,
        }
    }

    /// The completion policy is fixed per variant; the two behaviors are
    /// never merged into one screen.
    #[must_use]
    pub fn policy(self) -> CompletionPolicy {
        match self {
            Self::Plain => CompletionPolicy::Toggle,
            Self::Quest | Self::Playful => CompletionPolicy::RemoveOnComplete,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Quest => "quest",
            Self::Playful => "playful",
        }
    }
}
