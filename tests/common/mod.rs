//! Shared error fixtures for the integration tests.
#![allow(dead_code)]

use error_switch::prelude::*;

error_kinds! {
    /// Kind hierarchy shared by the integration tests.
    ///
    /// Two unchecked kinds hang off `Runtime`, two checked kinds off `Io`,
    /// and `Parse` is a flat checked kind with no relatives.
    pub enum JobKind {
        Runtime: unchecked,
        BadInput: unchecked < Runtime,
        State: unchecked < Runtime,
        Io: checked,
        MissingFile: checked < Io,
        Parse: checked,
    }
}

#[derive(Debug, PartialEq)]
pub struct JobError {
    pub kind: JobKind,
}

impl JobError {
    pub fn new(kind: JobKind) -> Self {
        Self { kind }
    }
}

impl KindedError for JobError {
    type Kind = JobKind;

    fn kind(&self) -> JobKind {
        self.kind
    }
}

pub fn fail(kind: JobKind) -> Result<u32, JobError> {
    Err(JobError::new(kind))
}

pub fn succeed() -> Result<u32, JobError> {
    Ok(42)
}
