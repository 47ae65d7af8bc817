//! Read-only data source for SQL managed instances.

mod context;
mod error;
mod model;
mod read;
mod schema;

pub use context::{ReadContext, Timeouts, DEFAULT_READ_TIMEOUT};
pub use error::ReadError;
pub use model::{Input, Output, ResourceState};
pub use read::{lookup, read, ReadOutcome};
pub use schema::{data_source, DataSourceDefinition, TYPE_NAME};

use sqlmi_core::ManagedInstancesClient;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// A client bound to the timeouts it should honour.
pub struct DataSource {
    client: Arc<dyn ManagedInstancesClient>,
    timeouts: Timeouts,
}

impl DataSource {
    pub fn new(client: Arc<dyn ManagedInstancesClient>) -> Self {
        Self {
            client,
            timeouts: Timeouts::default(),
        }
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn definition(&self) -> DataSourceDefinition {
        DataSourceDefinition {
            timeouts: self.timeouts,
            ..data_source()
        }
    }

    pub async fn read(
        &self,
        state: &mut ResourceState,
        cancel: CancellationToken,
    ) -> Result<ReadOutcome, ReadError> {
        let ctx = ReadContext::new(&self.timeouts).with_cancellation(cancel);
        read(self.client.as_ref(), state, &ctx).await
    }

    pub async fn lookup(
        &self,
        input: &Input,
        state: &mut ResourceState,
        cancel: CancellationToken,
    ) -> Result<ReadOutcome, ReadError> {
        let ctx = ReadContext::new(&self.timeouts).with_cancellation(cancel);
        lookup(self.client.as_ref(), input, state, &ctx).await
    }
}

pub use sqlmi_core;
