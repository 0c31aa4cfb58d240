use crate::error::{EngineError, EngineResult};
use crate::filter::FilterSpec;
use crate::options::{self, FilterOptions};
use crate::query::{self, Page, PageRequest};
use crate::session::{Dataset, SessionId, SessionState, SessionStore};
use crate::timeline::{self, Interval, Timeline};
use std::sync::Arc;


/// Read side of the service.
///
/// Every call resolves the session by id again; nothing is cached between
/// requests.
#[derive(Clone)]
pub struct LogEngine {
    store: Arc<dyn SessionStore>,
}

impl LogEngine {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// The dataset of a ready session.
    pub fn resolve(&self, id: &SessionId) -> EngineResult<Arc<Dataset>> {
        let Some(session) = self.store.get(id) else {
            return Err(EngineError::NotFound(id.clone()));
        };

        match session.state {
            SessionState::Ready(dataset) => Ok(dataset),
            SessionState::Pending => Err(EngineError::NotFound(id.clone())),
            SessionState::Failed(reason) => Err(EngineError::IngestionFailed(reason)),
        }
    }

    pub fn filter_options(&self, id: &SessionId) -> EngineResult<FilterOptions> {
        let dataset = self.resolve(id)?;
        Ok(options::derive(&dataset))
    }

    pub fn list(
        &self,
        id: &SessionId,
        filter: &FilterSpec,
        request: PageRequest,
    ) -> EngineResult<Page> {
        let dataset = self.resolve(id)?;
        let compiled = filter.compile()?;
        Ok(query::list(&dataset, &compiled, request))
    }

    pub fn timeline(
        &self,
        id: &SessionId,
        filter: &FilterSpec,
        interval: Interval,
    ) -> EngineResult<Timeline> {
        let dataset = self.resolve(id)?;
        let compiled = filter.compile()?;
        Ok(timeline::aggregate(&dataset, &compiled, interval))
    }
}
