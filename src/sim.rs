use std::path::{Path, PathBuf};
use std::process::Command;
use std::thread::{self, JoinHandle};

use miette::Result;

use crate::error;

/// Which simulator to launch and what to load into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    pub simulator: PathBuf,
    /// Object files, run one after another. Empty launches the simulator bare.
    pub objects: Vec<PathBuf>,
}

impl SimConfig {
    pub fn new(simulator: impl Into<PathBuf>) -> Self {
        SimConfig {
            simulator: simulator.into(),
            objects: Vec::new(),
        }
    }

    pub fn with_objects<I, P>(mut self, objects: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.objects.extend(objects.into_iter().map(Into::into));
        self
    }
}

/// Successful end of a simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Completion {
    /// Number of simulator processes that ran to a zero exit status.
    pub runs: usize,
}

/// Simulator running on a worker thread, so callers on a UI thread are never blocked.
pub struct Simulation {
    handle: JoinHandle<Result<Completion>>,
}

impl Simulation {
    pub fn spawn(config: SimConfig) -> Self {
        let handle = thread::spawn(move || run(&config));
        Simulation { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the simulator to finish.
    pub fn join(self) -> Result<Completion> {
        self.handle.join().map_err(|_| error::sim_panicked())?
    }
}

/// Run the simulator to completion on the current thread, stopping at the first failure.
pub fn run(config: &SimConfig) -> Result<Completion> {
    if config.objects.is_empty() {
        run_one(&config.simulator, None)?;
        return Ok(Completion { runs: 1 });
    }
    for object in &config.objects {
        run_one(&config.simulator, Some(object))?;
    }
    Ok(Completion {
        runs: config.objects.len(),
    })
}

fn run_one(simulator: &Path, object: Option<&Path>) -> Result<()> {
    let mut cmd = Command::new(simulator);
    if let Some(object) = object {
        cmd.arg(object);
    }
    // Output goes straight to the inherited terminal
    let status = cmd
        .status()
        .map_err(|e| error::sim_spawn(simulator, e))?;
    if !status.success() {
        return Err(error::sim_exit(simulator, object, status));
    }
    Ok(())
}
