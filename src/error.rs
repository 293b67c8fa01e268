use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bitmix operations
#[derive(Error, Diagnostic, Debug)]
pub enum BitmixError {
    #[error("IO error: {0}")]
    #[diagnostic(code(bitmix::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(bitmix::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(bitmix::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Palette config error: {message}")]
    #[diagnostic(code(bitmix::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Dimension mismatch: expected {expected_width}x{expected_height}, got {found_width}x{found_height}")]
    #[diagnostic(
        code(bitmix::dimensions),
        help("All input images must share the same width and height")
    )]
    Dimension {
        expected_width: u32,
        expected_height: u32,
        found_width: u32,
        found_height: u32,
    },

    #[error("XOR compositing requires {expected} input(s), got {found}")]
    #[diagnostic(code(bitmix::operands))]
    OperandCount { expected: usize, found: usize },

    #[error("Unrecognized animation axis '{token}'")]
    #[diagnostic(
        code(bitmix::axis),
        help("Only 'vertical' or 'horizontal' are supported")
    )]
    Axis { token: String },

    #[error("Composite error: {message}")]
    #[diagnostic(code(bitmix::composite))]
    Composite {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Image error: {message}")]
    #[diagnostic(code(bitmix::image))]
    Image { message: String },
}

pub type Result<T> = std::result::Result<T, BitmixError>;
