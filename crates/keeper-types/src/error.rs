/// Violations of the structural bounds the API documents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("token name must be {min}..={max} characters, got {got}")]
    NameLength { min: usize, max: usize, got: usize },

    #[error("token description exceeds {max} characters: got {got}")]
    DescriptionTooLong { max: usize, got: usize },

    #[error("precision must be at most {max}, got {got}")]
    PrecisionTooLarge { max: u8, got: u8 },

    #[error("alias must be {min}..={max} characters, got {got}")]
    AliasLength { min: usize, max: usize, got: usize },

    #[error("attachment exceeds {max} bytes: got {got}")]
    AttachmentTooLong { max: usize, got: usize },

    #[error("negative amount in `{field}`")]
    NegativeAmount { field: &'static str },

    #[error("mass transfer requires at least one recipient")]
    EmptyTransfers,

    #[error("script invocation supports at most {max} payment, got {got}")]
    TooManyPayments { max: usize, got: usize },

    #[error("notification title exceeds {max} characters: got {got}")]
    TitleTooLong { max: usize, got: usize },

    #[error("notification message exceeds {max} characters: got {got}")]
    MessageTooLong { max: usize, got: usize },

    #[error("a package may contain at most {max} transactions, got {got}")]
    PackageTooLarge { max: usize, got: usize },

    #[error("an empty package cannot be signed")]
    EmptyPackage,

    #[error("transaction type {code} is not permitted in a package")]
    PackageTypeNotAllowed { code: u16 },

    #[error("unsupported request type {code}")]
    UnsupportedRequestType { code: u16 },
}
