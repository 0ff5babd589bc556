use crate::protocol::enums::message_name::MessageName;
use crate::protocol::structs::msg_content::MsgContent;

impl MsgContent {
    pub fn heartbeat(id: &str) -> Self {
        Self {
            name: MessageName::heartbeat,
            id: id.to_string(),
            token: String::new(),
            server: String::new(),
        }
    }

    pub fn ping(token: &str) -> Self {
        Self {
            name: MessageName::ping,
            id: String::new(),
            token: token.to_string(),
            server: String::new(),
        }
    }

    pub fn pong(id: &str, token: &str) -> Self {
        Self {
            name: MessageName::pong,
            id: id.to_string(),
            token: token.to_string(),
            server: String::new(),
        }
    }

    pub fn reconfigure(token: &str, server: &str) -> Self {
        Self {
            name: MessageName::reconfigure,
            id: String::new(),
            token: token.to_string(),
            server: server.to_string(),
        }
    }

    pub fn invalidate(token: &str) -> Self {
        Self {
            name: MessageName::invalidate,
            id: String::new(),
            token: token.to_string(),
            server: String::new(),
        }
    }

    pub fn client_started(id: &str) -> Self {
        Self {
            name: MessageName::client_started,
            id: id.to_string(),
            token: String::new(),
            server: String::new(),
        }
    }

    pub fn client_invalidated(id: &str, token: &str) -> Self {
        Self {
            name: MessageName::client_invalidated,
            id: id.to_string(),
            token: token.to_string(),
            server: String::new(),
        }
    }
}
