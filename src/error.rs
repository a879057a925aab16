use thiserror::Error;

#[derive(Debug, Error)]
pub enum GreetError {
    #[error("failed to write greeting to stdout: {0}")]
    Output(#[from] std::io::Error),
    #[error("no name to greet")]
    MissingName,
}
