use thiserror::Error;

/// Errors raised while configuring the renderer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("unknown border style '{0}' (expected rounded, light, heavy, double or ascii)")]
    UnknownBorder(String),
}
