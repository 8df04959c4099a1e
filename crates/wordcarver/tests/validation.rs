#![allow(missing_docs)]

use wordcarver::WordPieceTokenizer;
use wordcarver::tokenizer::{DEFAULT_SPECIAL_TOKENS, UNKNOWN_TOKEN};
use wordcarver::training::WordPieceTrainerOptions;
use wordcarver::vocab::io::{load_piece_vocab_path, save_piece_vocab_path};

const SAMPLES: &[&str] = &[
    "the quick brown fox jumps over the lazy dog",
    "tokenization splits text into smaller meaningful units",
    "subword tokenization balances vocabulary size and coverage",
];

fn train_sample_tokenizer(vocab_size: usize) -> WordPieceTokenizer<u32> {
    let mut trainer = WordPieceTrainerOptions::new(vocab_size).init();
    trainer.update_from_samples(SAMPLES);
    trainer.train().unwrap()
}

#[test]
fn test_vocab_size_bound() {
    for vocab_size in [50, 100, 400] {
        let tokenizer = train_sample_tokenizer(vocab_size);
        assert!(tokenizer.vocab_size() <= vocab_size);
    }
}

#[test]
fn test_training_is_deterministic() {
    let a = train_sample_tokenizer(150);
    let b = train_sample_tokenizer(150);

    assert_eq!(
        a.vocab().piece_pairs().collect::<Vec<_>>(),
        b.vocab().piece_pairs().collect::<Vec<_>>()
    );
}

#[test]
fn test_specials_occupy_lowest_ids() {
    let tokenizer = train_sample_tokenizer(150);

    for (id, &special) in DEFAULT_SPECIAL_TOKENS.iter().enumerate() {
        assert_eq!(tokenizer.vocab().lookup_piece(id as u32), Some(special));
    }

    // Specials appear exactly once; merges never reproduce them.
    for &special in DEFAULT_SPECIAL_TOKENS {
        let hits = tokenizer
            .vocab()
            .iter_pieces()
            .filter(|&p| p == special)
            .count();
        assert_eq!(hits, 1);
    }
}

#[test]
fn test_specials_never_split() {
    let tokenizer = train_sample_tokenizer(150);

    let tokens = tokenizer.tokenize("[CLS] the fox [SEP]");
    assert_eq!(tokens.first().unwrap().as_str(), "[CLS]");
    assert_eq!(tokens.last().unwrap().as_str(), "[SEP]");
}

#[test]
fn test_decode_encode_round_trip_on_trained_words() {
    let tokenizer = train_sample_tokenizer(400);

    for sample in SAMPLES {
        for word in sample.split_whitespace() {
            let ids = tokenizer.encode(word);
            assert_eq!(tokenizer.decode(&ids), word.to_lowercase());
        }
    }
}

#[test]
fn test_out_of_vocabulary_words_are_whole_unknowns() {
    let tokenizer = train_sample_tokenizer(150);

    // One unknown per word; never a partial piece list.
    assert_eq!(
        tokenizer.tokenize("xylophone qqq"),
        vec![UNKNOWN_TOKEN, UNKNOWN_TOKEN]
    );
}

#[test]
fn test_scenario_first_merge_is_best_scored_pair() {
    // corpus: low, lower, lowest, newest, widest; all counts 1.
    //
    // Hand-computed scores peak at 1.0 for both (w, ##i) and
    // (##i, ##d); the lexicographic tie-break selects (##i, ##d),
    // so the first merged piece is "##id".
    let corpus = ["low", "lower", "lowest", "newest", "widest"];

    // Seed: 1 special + 11 initial char pieces; one merge slot.
    let mut trainer = WordPieceTrainerOptions::new(13)
        .with_special_tokens(["[UNK]"])
        .init();
    trainer.update_from_samples(corpus);

    let tokenizer: WordPieceTokenizer<u32> = trainer.train().unwrap();
    assert_eq!(tokenizer.vocab_size(), 13);
    assert_eq!(tokenizer.vocab().lookup_piece(12), Some("##id"));

    // No duplicate vocabulary entries ever occur.
    let mut pieces = tokenizer.vocab().iter_pieces().collect::<Vec<_>>();
    pieces.sort_unstable();
    pieces.dedup();
    assert_eq!(pieces.len(), tokenizer.vocab_size());
}

#[test]
fn test_scenario_untrained_text_is_unknown() {
    let mut trainer = WordPieceTrainerOptions::new(100).init();
    trainer.update_from_samples(["cat dog"]);

    let tokenizer: WordPieceTokenizer<u32> = trainer.train().unwrap();
    assert_eq!(tokenizer.tokenize("xyz"), vec![UNKNOWN_TOKEN]);
}

#[test]
fn test_scenario_max_chars_guard() {
    let tokenizer = train_sample_tokenizer(400).with_max_chars_per_word(3);

    assert_eq!(tokenizer.tokenize("hello"), vec![UNKNOWN_TOKEN]);
}

#[test]
fn test_scenario_decode_reconstruction() {
    let mut vocab = wordcarver::PieceVocab::<u32>::new();
    for piece in ["un", "##believe", "##able"] {
        vocab.add_piece(piece).unwrap();
    }
    let tokenizer = WordPieceTokenizer::from_vocab(vocab, &[] as &[&str]);

    assert_eq!(tokenizer.decode(&[0, 1, 2]), "unbelievable");
}

#[test]
fn test_save_load_round_trip() {
    let tokenizer = train_sample_tokenizer(150);

    tempdir::TempDir::new("wordcarver_validation")
        .and_then(|dir| {
            let path = dir.path().join("vocab.txt");

            save_piece_vocab_path(tokenizer.vocab(), &path).expect("Failed to save vocab");
            let vocab = load_piece_vocab_path(&path).expect("Failed to load vocab");

            let reloaded = WordPieceTokenizer::<u32>::from_vocab(vocab, DEFAULT_SPECIAL_TOKENS);

            for sample in SAMPLES {
                assert_eq!(reloaded.encode(sample), tokenizer.encode(sample));
                assert_eq!(
                    reloaded.decode(&reloaded.encode(sample)),
                    tokenizer.decode(&tokenizer.encode(sample))
                );
            }

            Ok(())
        })
        .unwrap();
}
