/// Result of a conditional create in the user directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The record did not exist and was written
    Created,
    /// A record with the same id was already present; nothing was written
    AlreadyExists,
}

impl CreateOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, CreateOutcome::Created)
    }
}
