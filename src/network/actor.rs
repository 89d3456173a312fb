//! Network actor - runs the HTTP fetch in the Tokio async runtime

use std::collections::HashMap;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, fetch_payload};

/// Tracks an in-flight request for cancellation at shutdown
struct ActiveRequest {
    cancel_tx: oneshot::Sender<()>,
}

/// Network actor that processes fetch commands
pub struct NetworkActor {
    client: reqwest::Client,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
    cancel_handles: HashMap<u64, ActiveRequest>,
}

impl NetworkActor {
    pub fn new(response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: create_client(),
            response_tx,
            active_requests: JoinSet::new(),
            cancel_handles: HashMap::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchData { id, url }) => {
                            let (cancel_tx, mut cancel_rx) = oneshot::channel();
                            self.cancel_handles.insert(id, ActiveRequest { cancel_tx });

                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, url = %url, "Fetching data");
                                tokio::select! {
                                    _ = &mut cancel_rx => {
                                        tracing::info!(id, "Fetch cancelled");
                                    }
                                    result = fetch_payload(&client, &url, id) => {
                                        match &result {
                                            NetworkResponse::Payload { time_ms, .. } => {
                                                tracing::info!(id, time_ms, "Fetch completed");
                                            }
                                            NetworkResponse::Error { message, .. } => {
                                                tracing::error!(id, error = %message, "Fetch failed");
                                            }
                                        }
                                        let _ = response_tx.send(result);
                                    }
                                }
                            });
                        }

                        Some(NetworkCommand::Shutdown) => {
                            for (_, active) in self.cancel_handles.drain() {
                                let _ = active.cancel_tx.send(());
                            }
                            break;
                        }

                        None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
