use thiserror::Error;

/// Errors loading the bundled datasets
#[derive(Debug, Error)]
pub enum DataError {
    #[error("dataset `{dataset}` is not valid JSON: {source}")]
    Parse {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset `{dataset}` is empty")]
    Empty { dataset: &'static str },
}

impl DataError {
    pub fn dataset(&self) -> &'static str {
        match self {
            DataError::Parse { dataset, .. } | DataError::Empty { dataset } => dataset,
        }
    }
}
