#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An identifier in the selection is not present in its catalog table.
    ///
    /// `field` names the selection field (`theme`, `platform`, `tone`,
    /// `pacing`); `value` is the rejected identifier as received.
    #[error("Unknown option: {value}")]
    UnknownOption { field: &'static str, value: String },
}
