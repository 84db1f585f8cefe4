//! In-memory [`Host`] for unit tests.

use std::{cell::RefCell, collections::HashMap, ffi::OsString, path::PathBuf};

use crate::{Error, Host, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Success,
    Failure,
    SpawnError,
}

#[derive(Debug)]
pub struct FakeHost {
    programs: HashMap<String, PathBuf>,
    vars: HashMap<String, String>,
    outcome: RunOutcome,
    runs: RefCell<Vec<Vec<OsString>>>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            programs: HashMap::new(),
            vars: HashMap::new(),
            outcome: RunOutcome::Success,
            runs: RefCell::new(Vec::new()),
        }
    }
}

impl FakeHost {
    pub fn with_program(mut self, name: &str, path: impl Into<PathBuf>) -> Self {
        self.programs.insert(name.to_string(), path.into());
        self
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub const fn with_outcome(mut self, outcome: RunOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    /// Every command line passed to [`Host::run`], in order.
    pub fn runs(&self) -> Vec<Vec<OsString>> {
        self.runs.borrow().clone()
    }
}

impl Host for FakeHost {
    fn find_program(&self, name: &str) -> Option<PathBuf> {
        self.programs.get(name).cloned()
    }

    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn run(&self, argv: &[OsString]) -> Result<bool> {
        self.runs.borrow_mut().push(argv.to_vec());
        match self.outcome {
            RunOutcome::Success => Ok(true),
            RunOutcome::Failure => Ok(false),
            RunOutcome::SpawnError => Err(Error::RendererProcess {
                program: argv
                    .first()
                    .map(|p| p.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                reason: "No such file or directory".to_string(),
            }),
        }
    }
}
