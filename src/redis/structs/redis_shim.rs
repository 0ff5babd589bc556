/// Probe that asks a real Redis server for its replication role.
#[derive(Debug, Clone)]
pub struct RedisShim {
    pub server: String,
}
