use std::{error::Error, fmt, io};

/// The crate's result type.
pub type Result<T> = std::result::Result<T, IntroErr>;

/// Failures in the demo library.
#[derive(Debug)]
pub enum IntroErr {
    WorkerPanic {
        worker: usize,
    },
    LengthMismatch {
        got: usize,
        expected: usize,
    },
    InvalidSweep {
        detail: &'static str,
    },
}

impl fmt::Display for IntroErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntroErr::WorkerPanic { worker } => {
                write!(f, "worker {worker} panicked inside the parallel region")
            }
            IntroErr::LengthMismatch { got, expected } => {
                write!(f, "vector length mismatch: got {got}, expected {expected}")
            }
            IntroErr::InvalidSweep { detail } => {
                write!(f, "invalid sweep configuration: {detail}")
            }
        }
    }
}

impl Error for IntroErr {}

/// Boundary conversion for binaries / I/O APIs.
impl From<IntroErr> for io::Error {
    fn from(value: IntroErr) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, value)
    }
}
