use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// A string did not name a known variant, e.g. `"yolo"` as a mistake tag.
    #[error("Unknown {0}: '{1}'")]
    InvalidInput(String, String),
}
