use std::error::Error;
use std::fmt::{Display, Formatter};

pub type EulerResult<T> = Result<T, EulerError>;
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EulerErrorCategory {
    Success,
    InputValidationError,
    IoSystemError,
    InternalError,
}

impl EulerErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::InternalError => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::InternalError => "InternalError",
        }
    }

    pub const fn is_fatal(self) -> bool {
        !matches!(self, Self::Success)
    }
}

/// Precondition violations detected before a configuration reaches the
/// composer or the matrix formatter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown rotation order '{0}'; expected one of XYX, XZX, YXY, YZY, ZXZ, ZYZ, XYZ, XZY, YXZ, YZX, ZXY, ZYX")]
    UnknownOrder(String),
    #[error("unknown rotation axis '{0}'; expected X, Y or Z")]
    UnknownAxis(String),
    #[error("unknown handedness '{0}'; expected 'right' or 'left'")]
    UnknownHandedness(String),
    #[error("expected exactly 3 angles, got {0}")]
    AngleCount(usize),
    #[error("expected exactly 3 symbols, got {0}")]
    SymbolCount(usize),
    #[error("angle {index} is not a finite number ({value})")]
    NonFiniteAngle { index: usize, value: f64 },
    #[error("slot index {0} is out of range; expected 0, 1 or 2")]
    IndexOutOfRange(usize),
    #[error("failed to read config '{path}': {reason}")]
    Unreadable { path: String, reason: String },
    #[error("failed to parse config '{path}': {reason}")]
    Malformed { path: String, reason: String },
}

impl ConfigError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownOrder(_) => "INPUT.ORDER",
            Self::UnknownAxis(_) => "INPUT.AXIS",
            Self::UnknownHandedness(_) => "INPUT.HANDEDNESS",
            Self::AngleCount(_) => "INPUT.ANGLE_COUNT",
            Self::SymbolCount(_) => "INPUT.SYMBOL_COUNT",
            Self::NonFiniteAngle { .. } => "INPUT.ANGLE_VALUE",
            Self::IndexOutOfRange(_) => "INPUT.SLOT_INDEX",
            Self::Unreadable { .. } => "IO.CONFIG_READ",
            Self::Malformed { .. } => "INPUT.CONFIG_PARSE",
        }
    }

    pub const fn category(&self) -> EulerErrorCategory {
        match self {
            Self::Unreadable { .. } => EulerErrorCategory::IoSystemError,
            _ => EulerErrorCategory::InputValidationError,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EulerError {
    category: EulerErrorCategory,
    code: &'static str,
    message: String,
}

impl EulerError {
    pub fn new(
        category: EulerErrorCategory,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            code,
            message: message.into(),
        }
    }

    pub fn input_validation(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(EulerErrorCategory::InputValidationError, code, message)
    }

    pub fn io_system(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(EulerErrorCategory::IoSystemError, code, message)
    }

    pub fn internal(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(EulerErrorCategory::InternalError, code, message)
    }

    pub const fn category(&self) -> EulerErrorCategory {
        self.category
    }

    pub const fn code(&self) -> &'static str {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        let severity = if self.category.is_fatal() {
            "ERROR"
        } else {
            "INFO"
        };
        format!("{}: [{}] {}", severity, self.code, self.message)
    }

    pub fn fatal_exit_line(&self) -> Option<String> {
        self.category
            .is_fatal()
            .then(|| format!("FATAL EXIT CODE: {}", self.exit_code()))
    }
}

impl From<ConfigError> for EulerError {
    fn from(error: ConfigError) -> Self {
        Self::new(error.category(), error.code(), error.to_string())
    }
}

impl Display for EulerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.as_str(),
            self.code,
            self.message
        )
    }
}

impl Error for EulerError {}
