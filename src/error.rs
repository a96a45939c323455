use failure::Fail;
use std::io;

#[derive(Debug, Fail)]
pub enum RideError {
    #[fail(display = "cannot remove visitor, the queue is empty")]
    EmptyQueue,

    #[fail(display = "cannot write history to \"{}\": {}", path, cause)]
    IoWrite {
        path: String,
        #[cause]
        cause: io::Error,
    },

    #[fail(display = "cannot read history from \"{}\": {}", path, cause)]
    IoRead {
        path: String,
        #[cause]
        cause: io::Error,
    },
}

#[derive(Debug, Fail, PartialEq)]
#[fail(display = "validation failed because of \"{}\"", error)]
pub struct ValidationError {
    pub error: String,
}

impl ValidationError {
    pub fn new<S: Into<String>>(error: S) -> ValidationError {
        ValidationError {
            error: error.into(),
        }
    }
}
