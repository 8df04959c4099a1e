use std::io::{BufRead, Write};

use wordcarver::WordPieceTokenizer;
use wordcarver::tokenizer::DEFAULT_SPECIAL_TOKENS;
use wordcarver::vocab::io::load_piece_vocab_path;

use crate::logging::LogArgs;

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    /// Vocabulary file.
    #[arg(long)]
    vocab: String,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Optional input file; "-" may be used to indicate stdin.
    #[arg(long)]
    input: Option<String>,

    /// Optional output file; "-" may be used to indicate stdout.
    #[arg(long)]
    output: Option<String>,
}

impl EncodeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let vocab = load_piece_vocab_path(&self.vocab)?;
        let tokenizer = WordPieceTokenizer::<u32>::from_vocab(vocab, DEFAULT_SPECIAL_TOKENS);
        log::info!("Loaded vocabulary: {} pieces", tokenizer.vocab_size());

        let reader = crate::input_output::open_reader(self.input.as_deref())?;
        let mut writer = crate::input_output::open_writer(self.output.as_deref())?;

        // One line of ids per line of input.
        for line in reader.lines() {
            let ids = tokenizer.encode(&line?);
            let ids = ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(writer, "{ids}")?;
        }
        writer.flush()?;

        Ok(())
    }
}
