use std::sync::Arc;
use std::time::Duration;
use futures_util::StreamExt;
use log::{error, info};
use tokio::sync::{mpsc, watch};
use tokio::time::sleep;
use tokio_tungstenite::tungstenite::Message;
use crate::client::structs::client_state::ClientState;
use crate::client::types::WsSource;
use crate::config::structs::configuration::Configuration;
use crate::protocol::structs::msg_content::MsgContent;
use crate::redis::traits::replica_probe::ReplicaProbe;

/// Capacity of the inbound message queue between reader and writer. A full
/// queue blocks the reader, which stalls frame consumption instead of
/// dropping messages.
pub const INPUT_QUEUE_SIZE: usize = 1000;

/// How long the supervisor waits for the reader to wind down after the
/// writer has closed the connection, before moving on with a warning.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

/// The reader task: decodes inbound text frames and forwards them to the
/// writer. Any transport error, unexpected frame kind or undecodable
/// payload ends the connection; a single frame is never retried.
pub async fn read_loop(mut source: WsSource, input: mpsc::Sender<MsgContent>, stop: watch::Receiver<bool>) {
    while !*stop.borrow() {
        let frame = match source.next().await {
            Some(Ok(Message::Text(frame))) => frame,
            Some(Ok(Message::Close(_))) => {
                info!("[READER] server closed the connection");
                break;
            }
            Some(Ok(frame)) => {
                error!("[READER] stopped reading from server socket: unexpected frame: {:?}", frame);
                break;
            }
            Some(Err(e)) => {
                error!("[READER] stopped reading from server socket: {}", e);
                break;
            }
            None => {
                info!("[READER] connection stream ended");
                break;
            }
        };
        let msg: MsgContent = match serde_json::from_str(frame.as_str()) {
            Ok(msg) => msg,
            Err(e) => {
                error!("[READER] could not parse msg, error={}: {}", e, frame.as_str());
                break;
            }
        };
        if input.send(msg).await.is_err() {
            break;
        }
    }
}

/// The connection supervisor: runs one connection after another until the
/// stop flag is raised. There is no retry bound; outliving coordinator and
/// network outages is the whole point of this loop. Protocol state is kept
/// across connections, so an already-accepted fencing token stays the floor
/// after a reconnect.
pub async fn run_failover_client<P: ReplicaProbe>(config: Arc<Configuration>, mut stop: watch::Receiver<bool>) {
    info!("[FAILOVER] client: {:?}", config.client);
    let reconnect_interval = Duration::from_secs(config.client.reconnect_interval);
    let mut state: ClientState<P> = ClientState::new(config);
    while !*stop.borrow() {
        if let Err(e) = state.run(&mut stop).await {
            error!("[FAILOVER] {}", e);
        }
        if !*stop.borrow() {
            tokio::select! {
                _ = sleep(reconnect_interval) => {}
                _ = stop.changed() => {}
            }
        }
    }
    info!("[FAILOVER] client stopped");
}
