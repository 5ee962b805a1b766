//! Background definitions loading
//!
//! The parse runs on its own thread and hands the finished map back over a
//! one-slot channel. The engine keeps serving the old definitions until it
//! picks the result up.

use super::definitions::Definitions;
use crate::error::{Error, Result};
use crossbeam_channel::{Receiver, TryRecvError, bounded};
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// A definitions load in flight
#[derive(Debug)]
pub struct PendingDefinitions {
    path: PathBuf,
    receiver: Receiver<Result<Definitions>>,
    handle: Option<JoinHandle<()>>,
}

impl PendingDefinitions {
    /// Start parsing `path` on a background thread
    ///
    /// # Errors
    /// Returns [`Error::SpawnLoader`] if the thread can't be started.
    pub fn spawn(path: &Path) -> Result<Self> {
        let (sender, receiver) = bounded(1);
        let thread_path = path.to_path_buf();
        let handle = thread::Builder::new()
            .name("definitions-loader".into())
            .spawn(move || {
                let result = Definitions::from_file(&thread_path);
                if sender.send(result).is_err() {
                    debug!(path = %thread_path.display(), "definitions load abandoned");
                }
            })
            .map_err(Error::SpawnLoader)?;

        Ok(Self {
            path: path.to_path_buf(),
            receiver,
            handle: Some(handle),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The load result if it is ready, without blocking
    pub fn try_take(&mut self) -> Option<Result<Definitions>> {
        match self.receiver.try_recv() {
            Ok(result) => {
                self.join();
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.join();
                Some(Err(Error::LoaderDisconnected))
            }
        }
    }

    /// Block until the load finishes
    pub fn take(mut self) -> Result<Definitions> {
        let result = self
            .receiver
            .recv()
            .unwrap_or(Err(Error::LoaderDisconnected));
        self.join();
        result
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!(path = %self.path.display(), "definitions loader panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_in_background() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "CAT a feline [n]").unwrap();

        let pending = PendingDefinitions::spawn(file.path()).unwrap();
        assert_eq!(pending.path(), file.path());
        let defs = pending.take().unwrap();
        assert_eq!(defs.len(), 1);
    }

    #[test]
    fn missing_file_reports_error() {
        let pending = PendingDefinitions::spawn(Path::new("/no/such/defs.txt")).unwrap();
        assert!(matches!(pending.take(), Err(Error::Open { .. })));
    }

    #[test]
    fn polling_eventually_yields() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "DOG a canine [n]").unwrap();

        let mut pending = PendingDefinitions::spawn(file.path()).unwrap();
        let result = loop {
            if let Some(result) = pending.try_take() {
                break result;
            }
            thread::yield_now();
        };
        assert!(result.unwrap().get("DOG").is_some());
    }
}
