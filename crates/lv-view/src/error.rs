use lv_scene::SceneError;
use thiserror::Error;

/// A failed render pass.  The surface keeps the previous frame; nothing
/// partial is ever drawn.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ViewError {
    #[error("render pass aborted: {0}")]
    Compose(#[from] SceneError),
}

pub type ViewResult<T> = Result<T, ViewError>;
