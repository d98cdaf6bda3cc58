// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    WindowInit(String),   // Creating the window failed
    WindowUpdate(String), // Updating the window buffer failed
    ImageLoad(String),    // Reading/decoding the source picture failed
    Export(String),       // Encoding/writing the PNG snapshot failed
    Logging(String),      // Installing the log backend failed
    Config(String),       // A command-line value could not be interpreted
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::ImageLoad(s) => write!(f, "Image load error: {s}"),
            Error::Export(s) => write!(f, "Export error: {s}"),
            Error::Logging(s) => write!(f, "Logging init error: {s}"),
            Error::Config(s) => write!(f, "Config error: {s}"),
        }
    }
}

impl std::error::Error for Error {}
