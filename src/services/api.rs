use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::api::{OverpassClient, Shop};
use crate::model::Location;

/// A shop search to run against Overpass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchRequest {
    /// Sequence number assigned by the reducer
    pub seq: u64,
    pub location: Location,
    pub radius: u32,
}

/// Outcome of one `FetchRequest`
#[derive(Debug)]
pub struct FetchResponse {
    pub seq: u64,
    pub shops: Result<Vec<Shop>, anyhow::Error>,
}

/// Fetch service worker
///
/// Requests are not de-duplicated or cancelled by newer ones; every request
/// gets its own task and its response is tagged with the request's `seq`.
/// Dropping the service aborts whatever is still in flight.
pub struct FetchService {
    client: OverpassClient,
    in_flight: JoinSet<()>,
    response_tx: mpsc::UnboundedSender<FetchResponse>,
}

impl FetchService {
    pub fn new(client: OverpassClient, response_tx: mpsc::UnboundedSender<FetchResponse>) -> Self {
        Self {
            client,
            in_flight: JoinSet::new(),
            response_tx,
        }
    }

    fn dispatch(&mut self, request: FetchRequest) {
        let client = self.client.clone();
        let response_tx = self.response_tx.clone();

        debug!(
            seq = request.seq,
            radius = request.radius,
            in_flight = self.in_flight.len(),
            "dispatching shop search"
        );

        self.in_flight.spawn(async move {
            let shops = client.fetch_shops(request.location, request.radius).await;
            // Receiver gone means the UI has shut down
            let _ = response_tx.send(FetchResponse {
                seq: request.seq,
                shops,
            });
        });
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }
}

/// Spawn the fetch service worker
///
/// The worker runs until the request sender is dropped, then aborts any
/// requests still in flight.
pub fn spawn_fetch_service(
    client: OverpassClient,
) -> (
    mpsc::UnboundedSender<FetchRequest>,
    mpsc::UnboundedReceiver<FetchResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<FetchRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<FetchResponse>();

    tokio::spawn(async move {
        let mut service = FetchService::new(client, response_tx);

        loop {
            tokio::select! {
                request = request_rx.recv() => {
                    match request {
                        Some(request) => service.dispatch(request),
                        None => break,
                    }
                }

                Some(joined) = service.in_flight.join_next(), if !service.in_flight.is_empty() => {
                    if let Err(e) = joined {
                        if !e.is_cancelled() {
                            warn!("fetch task failed: {}", e);
                        }
                    }
                }
            }
        }

        debug!(
            aborted = service.in_flight(),
            "fetch service stopping"
        );
        service.in_flight.shutdown().await;
    });

    (request_tx, response_rx)
}
