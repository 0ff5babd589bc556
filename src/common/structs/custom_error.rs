#[derive(Debug)]
pub struct CustomError {
    pub message: String,
}
