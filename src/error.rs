/// Broad failure category. Each kind maps to a stable process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Non-positive population, non-positive display ceiling, bad flag values.
    InvalidParameter,
    /// Malformed feed or unusable user input.
    Input,
    /// Region absent from the population registry.
    NotFound,
    /// The case feed could not be fetched.
    Source,
    /// Writing an export failed.
    Output,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::InvalidParameter | ErrorKind::Input => 2,
            ErrorKind::NotFound => 3,
            ErrorKind::Source => 4,
            ErrorKind::Output => 5,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidParameter, message)
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Input, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_kind() {
        assert_eq!(AppError::invalid_parameter("x").exit_code(), 2);
        assert_eq!(AppError::input("x").exit_code(), 2);
        assert_eq!(AppError::not_found("x").exit_code(), 3);
        assert_eq!(AppError::new(ErrorKind::Source, "x").exit_code(), 4);
        assert_eq!(AppError::new(ErrorKind::Output, "x").exit_code(), 5);
    }

    #[test]
    fn display_is_the_bare_message() {
        let err = AppError::not_found("Region 'X' not found.");
        assert_eq!(err.to_string(), "Region 'X' not found.");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
