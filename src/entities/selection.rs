use crate::map::MarkerId;

/// Point-selection state. Clicks only ever add markers; only an explicit
/// reset returns the selection to `Empty`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Empty,
    StartSet { start: MarkerId },
    Complete { start: MarkerId, end: MarkerId },
}

impl Selection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::StartSet { start: _ } => "start_set",
            Self::Complete { start: _, end: _ } => "complete",
        }
    }

    pub fn start_marker(&self) -> Option<MarkerId> {
        match self {
            Self::Empty => None,
            Self::StartSet { start } | Self::Complete { start, end: _ } => Some(*start),
        }
    }

    pub fn end_marker(&self) -> Option<MarkerId> {
        match self {
            Self::Complete { start: _, end } => Some(*end),
            _ => None,
        }
    }

    /// Both markers, present only once the selection is complete.
    pub fn markers(&self) -> Option<(MarkerId, MarkerId)> {
        match self {
            Self::Complete { start, end } => Some((*start, *end)),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }
}
