//! Shared Tokio runtime and mock API helpers for integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use rstest_bdd::Slot;
use serverboard::{ApiBaseUrl, ApiError, HttpCommunityGateway};
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Shared runtime wrapper that can be stored in an `rstest-bdd` Slot.
#[derive(Clone)]
pub struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Ensures a Tokio runtime and Wiremock server are initialised.
///
/// # Errors
///
/// Returns [`ApiError::Io`] if the Tokio runtime cannot be created.
pub fn ensure_runtime_and_server(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
) -> Result<SharedRuntime, ApiError> {
    if runtime.with_ref(|_| ()).is_none() {
        let created = Runtime::new().map_err(|error| ApiError::Io {
            message: format!("failed to create Tokio runtime: {error}"),
        })?;
        runtime.set(SharedRuntime::new(created));
    }

    let shared_runtime = runtime.get().ok_or_else(|| ApiError::Io {
        message: "runtime not initialised after set".to_owned(),
    })?;

    if server.with_ref(|_| ()).is_none() {
        server.set(shared_runtime.block_on(MockServer::start()));
    }

    Ok(shared_runtime)
}

/// Builds a cookie-aware gateway pointed at the mock server.
///
/// # Errors
///
/// Returns an error if the server is missing or the client cannot be built.
pub fn gateway_for(server: &Slot<MockServer>) -> Result<HttpCommunityGateway, ApiError> {
    let uri = server
        .with_ref(MockServer::uri)
        .ok_or_else(|| ApiError::InvalidUrl("mock server URL missing".to_owned()))?;
    HttpCommunityGateway::for_base_url(ApiBaseUrl::parse(&uri)?)
}
