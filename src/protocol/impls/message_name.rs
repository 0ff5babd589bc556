use std::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::protocol::enums::message_name::MessageName;

impl MessageName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageName::heartbeat => "heartbeat",
            MessageName::ping => "ping",
            MessageName::pong => "pong",
            MessageName::reconfigure => "reconfigure",
            MessageName::invalidate => "invalidate",
            MessageName::client_started => "client_started",
            MessageName::client_invalidated => "client_invalidated",
            MessageName::unknown => "unknown",
        }
    }
}

impl From<&str> for MessageName {
    fn from(name: &str) -> Self {
        match name {
            "heartbeat" => MessageName::heartbeat,
            "ping" => MessageName::ping,
            "pong" => MessageName::pong,
            "reconfigure" => MessageName::reconfigure,
            "invalidate" => MessageName::invalidate,
            "client_started" => MessageName::client_started,
            "client_invalidated" => MessageName::client_invalidated,
            _ => MessageName::unknown,
        }
    }
}

impl fmt::Display for MessageName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MessageName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Hand-written so that names outside the vocabulary map to `unknown`
// instead of failing the whole frame.
impl<'de> Deserialize<'de> for MessageName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(MessageName::from(name.as_str()))
    }
}
