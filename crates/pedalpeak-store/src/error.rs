use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize value for key {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid storage key \"{0}\"")]
    InvalidKey(String),
}

#[derive(Debug, Error)]
pub enum BulkSourceError {
    #[error("failed to read bulk source {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Rejections raised at the admin edit boundary. Nothing is mutated when one
/// of these is returned.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("product not found: {id}")]
    NotFound { id: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum CartError {
    #[error("no product with id {id} in the catalog")]
    UnknownProduct { id: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("add at least one item to the cart before checking out")]
    EmptyCart,

    #[error("customer name is required")]
    MissingCustomerName,

    #[error(transparent)]
    Store(#[from] StoreError),
}
