use std::io::BufRead;

use wordcarver::WordPieceTokenizer;
use wordcarver::tokenizer::DEFAULT_SPECIAL_TOKENS;
use wordcarver::training::{WordPieceTrainer, WordPieceTrainerOptions};
use wordcarver::vocab::io::save_piece_vocab_path;

use crate::logging::LogArgs;

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    /// Input text files, one sample per line.
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Max vocab size.
    #[arg(long, default_value = "1000")]
    vocab_size: usize,

    /// Special tokens, in id order.
    #[arg(long = "special-token", default_values_t = DEFAULT_SPECIAL_TOKENS.iter().map(|s| s.to_string()))]
    special_tokens: Vec<String>,

    /// Output vocabulary file.
    #[arg(long)]
    output: String,
}

impl TrainArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let options = WordPieceTrainerOptions::new(self.vocab_size)
            .with_special_tokens(&self.special_tokens);
        let mut trainer = options.init();

        log::info!("Reading samples:");
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            read_text_file(&mut trainer, path)?;
        }

        log::info!("Training tokenizer...");
        let tokenizer: WordPieceTokenizer<u32> = trainer.train()?;

        log::info!("Vocabulary size: {}", tokenizer.vocab_size());

        log::info!("Writing vocabulary: {}", self.output);
        save_piece_vocab_path(tokenizer.vocab(), &self.output)?;

        Ok(())
    }
}

fn read_text_file(
    trainer: &mut WordPieceTrainer,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let reader = crate::input_output::open_reader(Some(path))?;
    for line in reader.lines() {
        let line = line?;
        trainer.update_from_samples([line]);
    }
    Ok(())
}
