/// Discriminator of every wire message.
///
/// `unknown` never appears on the wire for outbound traffic; it is the
/// decode target for any name outside the vocabulary, so that an unexpected
/// message can be logged and dropped instead of failing the connection.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum MessageName {
    heartbeat,
    ping,
    pong,
    reconfigure,
    invalidate,
    client_started,
    client_invalidated,
    #[default]
    unknown,
}
