use clap::Args;

/// Logging argument group.
#[derive(Args, Debug)]
pub struct LogArgs {
    /// Silence all log output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, etc.).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl LogArgs {
    /// Initialize stderr logging.
    ///
    /// ## Arguments
    /// * `base_verbosity` - The verbosity level at zero `-v` flags.
    pub fn setup_logging(
        &self,
        base_verbosity: usize,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(base_verbosity + self.verbose as usize)
            .init()?;
        Ok(())
    }
}
