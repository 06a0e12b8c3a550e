/// Errors surfaced to the caller of a dump.
///
/// Capture never fails: anything that goes wrong while reading live runtime
/// state degrades to a placeholder inside the snapshot. Only writing the
/// report can fail, and those failures belong to the caller's sink.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Couldn't write the stack dump: {0}")]
    Io(#[from] std::io::Error),

    #[error("Couldn't format the stack dump: {0}")]
    Format(#[from] std::fmt::Error),
}
