use thiserror::Error;

#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("required element `#{0}` is missing from the page")]
    MissingElement(&'static str),
}
