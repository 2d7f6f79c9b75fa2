use crate::config::{self, AppPaths, LocalRepository};
use crate::error::AppResult;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub verbose: u8,
    pub paths: AppPaths,
    pub repository: LocalRepository,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(json: bool, verbose: u8) -> AppResult<Self> {
        let paths = AppPaths::discover()?;
        let repository = config::local_repository(&paths);
        let output = Output::new(json);

        Ok(Self {
            verbose,
            paths,
            repository,
            output,
        })
    }
}
