//! Mutation Outcomes
//!
//! Every targeted update reports whether it actually changed stored state.
//! An update that matched nothing new is still a successful request; the
//! handler picks a "no changes" message instead of an error.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// At least one stored value changed
    Modified,
    /// The request was valid but nothing changed
    Unchanged,
}

impl MutationOutcome {
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows > 0 {
            Self::Modified
        } else {
            Self::Unchanged
        }
    }

    pub fn is_modified(self) -> bool {
        self == Self::Modified
    }

    /// Pick the acknowledgement for this outcome
    pub fn message(self, modified: &'static str, unchanged: &'static str) -> &'static str {
        match self {
            Self::Modified => modified,
            Self::Unchanged => unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_affected() {
        assert_eq!(MutationOutcome::from_rows_affected(0), MutationOutcome::Unchanged);
        assert_eq!(MutationOutcome::from_rows_affected(3), MutationOutcome::Modified);
        assert!(MutationOutcome::Modified.is_modified());
    }
}
