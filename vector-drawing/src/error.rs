use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("vertex capacity must be between 1 and {max}, got {0}", max = crate::storage::MAX_CAPACITY)]
    InvalidCapacity(usize),
    #[error("vertex storage is full ({capacity} vertices)")]
    CapacityExceeded { capacity: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("unknown draw mode `{0}`")]
    InvalidMode(String),
    #[error("no shape has been created yet")]
    NoActiveShape,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("expected a color of the form #rrggbb, got `{0}`")]
    Malformed(String),
}

/// Failures raised while talking to the WebGL2 context.
#[derive(Debug, Error)]
pub enum GlError {
    #[error("canvas has no webgl2 context")]
    Context,
    #[error("could not create {0}")]
    Create(&'static str),
    #[error("shader compilation failed: {0}")]
    Compile(String),
    #[error("program link failed: {0}")]
    Link(String),
    #[error("vertex attribute `{0}` not found in program")]
    Attribute(&'static str),
    #[error("buffer of {0} bytes exceeds the webgl size limit")]
    BufferTooLarge(usize),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Anything that can stop the drawing page from starting or updating.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Gl(#[from] GlError),
    #[error("no browser document available")]
    NoDocument,
    #[error("element `#{0}` not found")]
    MissingElement(String),
    #[error("element `#{0}` has an unexpected type")]
    WrongElement(String),
    #[error("dom error: {0}")]
    Dom(String),
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
