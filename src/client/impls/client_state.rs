use std::sync::Arc;
use std::time::Duration;
use futures_util::{SinkExt, StreamExt};
use log::{error, info, warn};
use tokio::sync::{mpsc, watch};
use tokio::time::{interval_at, timeout, Instant};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use crate::client::client::{read_loop, INPUT_QUEUE_SIZE, SHUTDOWN_GRACE};
use crate::client::enums::client_error::ClientError;
use crate::client::enums::master_reference::MasterReference;
use crate::client::structs::client_state::ClientState;
use crate::client::types::WsSink;
use crate::config::structs::configuration::Configuration;
use crate::masterfile::structs::master_file::MasterFile;
use crate::protocol::enums::message_name::MessageName;
use crate::protocol::structs::msg_content::MsgContent;
use crate::redis::traits::replica_probe::ReplicaProbe;

impl<P: ReplicaProbe> ClientState<P> {
    pub fn new(config: Arc<Configuration>) -> ClientState<P> {
        let url = format!("ws://{}:{}/configuration", config.client.server, config.client.port);
        let master_file = MasterFile::new(&config.client.redis_master_file);
        ClientState {
            config,
            url,
            current_token: String::new(),
            current_master: MasterReference::Absent,
            master_file,
        }
    }

    /// The fencing-token guard. Advances the held token to the maximum of
    /// itself and `token`, then reports whether `token` was acceptable,
    /// which is exactly the case when it was not below the previous floor.
    pub fn redeem_token(&mut self, token: &str) -> bool {
        if self.current_token.is_empty() || token > self.current_token.as_str() {
            self.current_token = token.to_string();
        }
        let token_valid = token >= self.current_token.as_str();
        if !token_valid {
            info!("[TOKEN] invalid token: {} is not greater or equal to {}", token, self.current_token);
        }
        token_valid
    }

    pub fn new_master(&mut self, server: &str) {
        info!("[MASTER] setting new master: {}", server);
        self.current_master = MasterReference::Present(P::new(server));
    }

    /// Resumes the belief recorded in the master file, if any. The role of
    /// that replica is not trusted yet; the caller probes it separately.
    pub fn determine_initial_master(&mut self) {
        if !self.master_file.exists() {
            return;
        }
        let server = self.master_file.read();
        if !server.is_empty() {
            self.new_master(&server);
        }
    }

    /// Applies one received message to the protocol state machine and
    /// returns the reply frame to send, if the message warrants one.
    pub async fn dispatch(&mut self, msg: MsgContent) -> Result<Option<MsgContent>, ClientError> {
        info!("[DISPATCH] received: {:?}", msg);
        match msg.name {
            MessageName::reconfigure => self.reconfigure(msg),
            MessageName::ping => Ok(self.ping(msg)),
            MessageName::invalidate => self.invalidate(msg).await,
            name => {
                error!("[DISPATCH] unexpected message: {}", name);
                Ok(None)
            }
        }
    }

    pub fn ping(&mut self, msg: MsgContent) -> Option<MsgContent> {
        if self.redeem_token(&msg.token) {
            return Some(MsgContent::pong(&self.config.client.client_id, &self.current_token));
        }
        None
    }

    pub fn reconfigure(&mut self, msg: MsgContent) -> Result<Option<MsgContent>, ClientError> {
        if !self.redeem_token(&msg.token) {
            info!("[DISPATCH] received invalid or outdated token: {}", msg.token);
        }
        // The address comparison deliberately ignores the token verdict:
        // the latest coordinator address always wins.
        if msg.server != self.master_file.read() {
            self.new_master(&msg.server);
            self.master_file.write(&msg.server)?;
        }
        Ok(None)
    }

    pub async fn invalidate(&mut self, msg: MsgContent) -> Result<Option<MsgContent>, ClientError> {
        if self.redeem_token(&msg.token) && !self.current_master.confirmed_master().await {
            self.current_master = MasterReference::Absent;
            self.master_file.clear()?;
            info!(
                "[DISPATCH] sending client_invalidated with id '{}' and token '{}'",
                self.config.client.client_id, self.current_token
            );
            return Ok(Some(MsgContent::client_invalidated(&self.config.client.client_id, &self.current_token)));
        }
        Ok(None)
    }

    pub async fn send(&self, sink: &mut WsSink, msg: MsgContent) -> Result<(), ClientError> {
        let data = serde_json::to_string(&msg)?;
        match sink.send(Message::text(data.as_str())).await {
            Ok(_) => {
                info!("[FAILOVER] sent {}", data);
                Ok(())
            }
            Err(e) => {
                error!("[FAILOVER] could not send message, error={}: {}", e, data);
                Err(ClientError::Transport(e))
            }
        }
    }

    /// Orderly close handshake; a failure here only gets logged, the
    /// connection is over either way.
    pub async fn close(&self, sink: &mut WsSink) {
        if let Err(e) = sink.send(Message::Close(None)).await {
            error!("[FAILOVER] write close failed: {}", e);
        }
    }

    /// The writer task: sole mutator of protocol state. Handles exactly one
    /// event per iteration, either a queued message or a timer tick, and
    /// emits a heartbeat whenever the tick counter wraps.
    pub async fn write_loop(
        &mut self,
        sink: &mut WsSink,
        mut input: mpsc::Receiver<MsgContent>,
        stop: &mut watch::Receiver<bool>,
    ) -> Result<(), ClientError> {
        // First tick after a full second; an immediate first tick would
        // shift the heartbeat phase to the start of the connection.
        let mut ticker = interval_at(Instant::now() + Duration::from_secs(1), Duration::from_secs(1));
        let mut tick: u64 = 0;
        while !*stop.borrow() {
            tokio::select! {
                msg = input.recv() => {
                    match msg {
                        Some(msg) => {
                            if let Some(reply) = self.dispatch(msg).await? {
                                self.send(sink, reply).await?;
                            }
                        }
                        // The reader is gone; this connection is over.
                        None => return Ok(()),
                    }
                }
                _ = ticker.tick() => {
                    tick = (tick + 1) % self.config.client.heartbeat_interval;
                    if tick == 0 {
                        self.send(sink, MsgContent::heartbeat(&self.config.client.client_id)).await?;
                    }
                }
                _ = stop.changed() => return Ok(()),
            }
        }
        Ok(())
    }

    /// Runs one connection from dial to teardown. Any error ends the
    /// connection and bubbles up to the supervisor's retry loop.
    pub async fn run(&mut self, stop: &mut watch::Receiver<bool>) -> Result<(), ClientError> {
        self.determine_initial_master();
        if !self.current_master.confirmed_master().await {
            info!("[FAILOVER] no confirmed master, clearing master file");
            self.master_file.clear()?;
        }

        info!("[FAILOVER] connecting to {}", self.url);
        let (ws_stream, _) = connect_async(self.url.as_str()).await?;
        info!("[FAILOVER] established web socket connection");

        self.master_file.verify()?;

        let (mut sink, source) = ws_stream.split();
        self.send(&mut sink, MsgContent::client_started(&self.config.client.client_id)).await?;

        let (input_tx, input_rx) = mpsc::channel(INPUT_QUEUE_SIZE);
        let reader = tokio::spawn(read_loop(source, input_tx, stop.clone()));

        let result = self.write_loop(&mut sink, input_rx, stop).await;
        self.close(&mut sink).await;

        match timeout(SHUTDOWN_GRACE, reader).await {
            Ok(_) => info!("[FAILOVER] connection finished"),
            Err(_) => warn!("[FAILOVER] closing websocket timed out after {} second(s)", SHUTDOWN_GRACE.as_secs()),
        }
        result
    }
}
