//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        api_url: String,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(api_url),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Mount: render the loading page, then issue the single fetch
        let _ = self.render_tx.send(self.state.to_render_state());
        if let Some(cmd) = self.state.begin_fetch() {
            let _ = self.network_tx.send(cmd);
        }

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::ScrollUp => self.state.scroll_up(),
            UiEvent::ScrollDown => self.state.scroll_down(),
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApiPayload, FetchState};

    fn spawn_actor() -> (
        mpsc::UnboundedSender<UiEvent>,
        mpsc::UnboundedSender<NetworkResponse>,
        mpsc::UnboundedReceiver<NetworkCommand>,
        mpsc::UnboundedReceiver<RenderState>,
    ) {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();

        let actor = AppActor::new(
            String::from("http://localhost:5000/api/data"),
            net_cmd_tx,
            render_tx,
        );
        tokio::spawn(actor.run(ui_rx, net_resp_rx));

        (ui_tx, net_resp_tx, net_cmd_rx, render_rx)
    }

    #[tokio::test]
    async fn test_mount_emits_loading_then_fetch_command() {
        let (_ui_tx, _net_tx, mut cmd_rx, mut render_rx) = spawn_actor();

        let first = render_rx.recv().await.expect("initial render state");
        assert_eq!(first.fetch, FetchState::Loading);

        match cmd_rx.recv().await.expect("fetch command") {
            NetworkCommand::FetchData { url, .. } => {
                assert_eq!(url, "http://localhost:5000/api/data");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_payload_response_renders_succeeded() {
        let (_ui_tx, net_tx, mut cmd_rx, mut render_rx) = spawn_actor();

        let _ = render_rx.recv().await;
        let id = match cmd_rx.recv().await.unwrap() {
            NetworkCommand::FetchData { id, .. } => id,
            other => panic!("unexpected command: {:?}", other),
        };

        net_tx
            .send(NetworkResponse::Payload {
                id,
                payload: ApiPayload {
                    message: String::from("Hello"),
                    data: vec![serde_json::json!(1)],
                },
                time_ms: 7,
            })
            .unwrap();

        let rendered = render_rx.recv().await.expect("render after response");
        match rendered.fetch {
            FetchState::Succeeded(p) => assert_eq!(p.message, "Hello"),
            other => panic!("expected Succeeded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_quit_sends_shutdown() {
        let (ui_tx, _net_tx, mut cmd_rx, mut render_rx) = spawn_actor();

        let _ = render_rx.recv().await;
        let _ = cmd_rx.recv().await; // the fetch command

        ui_tx.send(UiEvent::Quit).unwrap();
        assert!(matches!(
            cmd_rx.recv().await,
            Some(NetworkCommand::Shutdown)
        ));
    }
}
