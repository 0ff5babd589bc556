/// Handle to the file the last known master address is persisted to.
#[derive(Debug, Clone)]
pub struct MasterFile {
    pub path: String,
}
