use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tempfile::TempDir;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;
use tokio::time::timeout;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::WebSocketStream;
use redis_failover_client::client::structs::client_state::ClientState;
use redis_failover_client::config::structs::configuration::Configuration;
use redis_failover_client::masterfile::structs::master_file::MasterFile;
use redis_failover_client::protocol::enums::message_name::MessageName;
use redis_failover_client::protocol::structs::msg_content::MsgContent;
use redis_failover_client::redis::enums::replica_role::ReplicaRole;
use redis_failover_client::redis::traits::replica_probe::ReplicaProbe;

struct DemotedProbe {
    address: String,
}

#[async_trait]
impl ReplicaProbe for DemotedProbe {
    fn new(address: &str) -> Self {
        Self { address: address.to_string() }
    }
    fn address(&self) -> &str {
        &self.address
    }
    async fn role(&self) -> ReplicaRole {
        ReplicaRole::NotMaster
    }
}

async fn test_setup(dir: &TempDir) -> (Arc<Configuration>, TcpListener) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let mut config = Configuration::init();
    config.client.server = "127.0.0.1".to_string();
    config.client.port = port;
    config.client.client_id = "it-client".to_string();
    config.client.redis_master_file = dir.path().join("redis_master.txt").to_str().unwrap().to_string();
    // keep heartbeats out of the frame sequence under test
    config.client.heartbeat_interval = 60;
    (Arc::new(config), listener)
}

async fn send_msg(ws: &mut WebSocketStream<TcpStream>, msg: MsgContent) {
    let data = serde_json::to_string(&msg).unwrap();
    ws.send(Message::text(data)).await.unwrap();
}

async fn recv_msg(ws: &mut WebSocketStream<TcpStream>) -> MsgContent {
    loop {
        match timeout(Duration::from_secs(5), ws.next()).await.unwrap() {
            Some(Ok(Message::Text(frame))) => return serde_json::from_str(frame.as_str()).unwrap(),
            Some(Ok(_)) => continue,
            other => panic!("connection ended while waiting for a frame: {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_client_announces_reconfigures_and_invalidates() {
    let dir = TempDir::new().unwrap();
    let (config, listener) = test_setup(&dir).await;
    let master_file = MasterFile::new(&config.client.redis_master_file);
    master_file.write("redis1:6379").unwrap();

    let coordinator = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let mut ws = accept_async(socket).await.unwrap();

        let started = recv_msg(&mut ws).await;
        assert_eq!(started.name, MessageName::client_started, "First frame should announce the client");
        assert_eq!(started.id, "it-client");

        send_msg(&mut ws, MsgContent::reconfigure("a", "redis2:6379")).await;
        send_msg(&mut ws, MsgContent::ping("b")).await;

        let pong = recv_msg(&mut ws).await;
        assert_eq!(pong.name, MessageName::pong, "An acceptable ping should be answered");
        assert_eq!(pong.id, "it-client");
        assert_eq!(pong.token, "b", "Pong should carry the advanced token");

        send_msg(&mut ws, MsgContent::invalidate("b")).await;

        let invalidated = recv_msg(&mut ws).await;
        assert_eq!(invalidated.name, MessageName::client_invalidated, "A demoted master should be given up");
        assert_eq!(invalidated.id, "it-client");
        assert_eq!(invalidated.token, "b");

        ws.close(None).await.unwrap();
    });

    let (_stop_tx, mut stop_rx) = watch::channel(false);
    let mut state: ClientState<DemotedProbe> = ClientState::new(config.clone());
    let result = timeout(Duration::from_secs(10), state.run(&mut stop_rx)).await.unwrap();
    assert!(result.is_ok(), "A server-side close should end the connection cleanly: {:?}", result);

    coordinator.await.unwrap();
    assert_eq!(master_file.read(), "", "Invalidation should have cleared the master file");
    assert_eq!(state.current_token, "b", "Token floor should survive the connection teardown");
}

#[tokio::test]
async fn test_client_keeps_token_floor_but_adopts_stale_reconfigure() {
    let dir = TempDir::new().unwrap();
    let (config, listener) = test_setup(&dir).await;
    let master_file = MasterFile::new(&config.client.redis_master_file);

    let coordinator = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let mut ws = accept_async(socket).await.unwrap();

        let started = recv_msg(&mut ws).await;
        assert_eq!(started.name, MessageName::client_started);

        send_msg(&mut ws, MsgContent::ping("5")).await;
        let pong = recv_msg(&mut ws).await;
        assert_eq!(pong.token, "5");

        // stale token, fresher address: the address must win anyway
        send_msg(&mut ws, MsgContent::reconfigure("3", "redis9:6379")).await;
        send_msg(&mut ws, MsgContent::ping("3")).await;
        send_msg(&mut ws, MsgContent::ping("6")).await;

        let pong = recv_msg(&mut ws).await;
        assert_eq!(pong.token, "6", "The stale ping should have been dropped without a reply");

        ws.close(None).await.unwrap();
    });

    let (_stop_tx, mut stop_rx) = watch::channel(false);
    let mut state: ClientState<DemotedProbe> = ClientState::new(config.clone());
    let result = timeout(Duration::from_secs(10), state.run(&mut stop_rx)).await.unwrap();
    assert!(result.is_ok(), "{:?}", result);

    coordinator.await.unwrap();
    assert_eq!(master_file.read(), "redis9:6379", "Reconfigure should persist the new master address");
    assert_eq!(state.current_master.address(), Some("redis9:6379"));
    assert_eq!(state.current_token, "6");
}

#[tokio::test]
async fn test_client_heartbeats_on_schedule() {
    let dir = TempDir::new().unwrap();
    let (config, listener) = test_setup(&dir).await;
    let config = {
        let mut config = (*config).clone();
        config.client.heartbeat_interval = 1;
        Arc::new(config)
    };

    let coordinator = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let mut ws = accept_async(socket).await.unwrap();

        let started = recv_msg(&mut ws).await;
        assert_eq!(started.name, MessageName::client_started);
        let started_at = std::time::Instant::now();

        let heartbeat = recv_msg(&mut ws).await;
        assert_eq!(heartbeat.name, MessageName::heartbeat, "The client should heartbeat without being prompted");
        assert!(
            started_at.elapsed() >= Duration::from_millis(900),
            "The first heartbeat belongs a full interval after connection start, not at it"
        );
        assert_eq!(heartbeat.id, "it-client");
        assert!(heartbeat.token.is_empty(), "Heartbeats carry no token");

        ws.close(None).await.unwrap();
    });

    let (_stop_tx, mut stop_rx) = watch::channel(false);
    let mut state: ClientState<DemotedProbe> = ClientState::new(config);
    let result = timeout(Duration::from_secs(10), state.run(&mut stop_rx)).await.unwrap();
    assert!(result.is_ok(), "{:?}", result);

    coordinator.await.unwrap();
}

#[tokio::test]
async fn test_client_stops_on_request() {
    let dir = TempDir::new().unwrap();
    let (config, listener) = test_setup(&dir).await;

    let coordinator = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let mut ws = accept_async(socket).await.unwrap();
        let started = recv_msg(&mut ws).await;
        assert_eq!(started.name, MessageName::client_started);
        // hold the connection open until the client goes away
        while let Some(Ok(_)) = ws.next().await {}
    });

    let (stop_tx, mut stop_rx) = watch::channel(false);
    let mut state: ClientState<DemotedProbe> = ClientState::new(config);
    let client = async {
        state.run(&mut stop_rx).await
    };
    let shutdown = async {
        tokio::time::sleep(Duration::from_millis(200)).await;
        stop_tx.send(true).unwrap();
    };
    let (result, _) = tokio::join!(client, shutdown);
    assert!(result.is_ok(), "A requested stop is not an error: {:?}", result);

    coordinator.await.unwrap();
}
