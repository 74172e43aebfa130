use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Success,
    Error,
}

/// How a command finished, and what to tell the user about it.
#[derive(Debug)]
pub struct Exit {
    status: Status,
    message: Option<String>,
}

impl Exit {
    #[must_use]
    pub fn success() -> Self {
        Exit {
            status: Status::Success,
            message: None,
        }
    }

    #[must_use]
    pub fn error() -> Self {
        Exit {
            status: Status::Error,
            message: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Prints the message, to stderr on error, and converts to a process
    /// exit code.
    pub fn report(self) -> ExitCode {
        match (self.status, self.message) {
            (Status::Success, Some(message)) => println!("{message}"),
            (Status::Error, Some(message)) => eprintln!("{message}"),
            (_, None) => {}
        }
        match self.status {
            Status::Success => ExitCode::SUCCESS,
            Status::Error => ExitCode::FAILURE,
        }
    }
}
