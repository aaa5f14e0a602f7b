//! Embedding model catalog exposed by the service.

use crate::error::ConsoleError;
use crate::model::EmbeddingConfig;
use crate::repo::decode_list;
use crate::transport::{invoke, routes, Transport};

pub struct ModelCatalog<'t, T: Transport> {
    transport: &'t T,
}

impl<'t, T: Transport> ModelCatalog<'t, T> {
    pub fn new(transport: &'t T) -> Self {
        Self { transport }
    }

    pub fn embedding_models(&self) -> Result<Vec<EmbeddingConfig>, ConsoleError> {
        decode_list(
            invoke(self.transport, routes::list_embedding_models())?,
            "models",
            "embedding model",
        )
    }
}
