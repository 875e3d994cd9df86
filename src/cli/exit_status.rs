use std::process::ExitCode;

/// Process exit status of a honolate run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Language files already matched the sources.
    Success,
    /// Drift was found, whether it was fixed or left alone in read-only mode.
    Failure,
    /// Configuration, I/O or parse error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}
