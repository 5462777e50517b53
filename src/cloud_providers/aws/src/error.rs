use aws_sdk_pricing::error::BuildError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T, E = ProductInfoError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum ProductInfoError {
    #[error("could not create session: {0}")]
    Session(String),

    #[error("{operation} request to the pricing API failed: {source}")]
    Query {
        operation: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("unknown region: {0}")]
    UnknownRegion(String),

    #[error("failed to build pricing filter: {0}")]
    Filter(#[from] BuildError),
}

impl ProductInfoError {
    pub(crate) fn query(operation: &'static str) -> impl FnOnce(BoxError) -> Self {
        move |source| Self::Query { operation, source }
    }
}
