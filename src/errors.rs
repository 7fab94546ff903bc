use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid amount entered!")]
    InvalidAmount,

    #[error("Amount must be positive!")]
    NonPositiveAmount,

    #[error("Description cannot be empty!")]
    EmptyDescription,

    #[error("Category cannot be empty!")]
    EmptyCategory,

    #[error("input stream closed")]
    InputClosed,

    #[error("value overflow")]
    ValueOverflow,
}

impl TrackerError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount
                | Self::NonPositiveAmount
                | Self::EmptyDescription
                | Self::EmptyCategory
        )
    }
}
