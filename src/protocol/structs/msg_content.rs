use serde::{Deserialize, Serialize};
use crate::protocol::enums::message_name::MessageName;

/// One protocol message. Every kind uses this shape; fields that carry no
/// meaning for a kind stay empty and are omitted from the wire encoding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MsgContent {
    pub name: MessageName,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub server: String,
}
