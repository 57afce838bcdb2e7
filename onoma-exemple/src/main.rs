use onoma_core::analysis::corpus;
use onoma_core::analysis::syllables::detect_syllables;
use onoma_core::config::AnalysisConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A small embedded corpus; a real run would load a word list with
    // onoma_core::words::read_words, which also handles comments,
    // whitespace and case folding.
    let words: Vec<String> = [
        "banana", "apple", "strand", "queen", "sofa", "lantern", "melody",
        "orchard", "ravine", "tundra",
    ]
    .iter()
    .map(|w| (*w).to_string())
    .collect();

    // Syllable segmentation can be used on its own, without running the
    // full analysis.
    for syllable in detect_syllables("lantern") {
        println!(
            "lantern syllable: onset={:?} nucleus={:?} coda={:?}",
            syllable.onset, syllable.nucleus, syllable.coda
        );
    }

    // Build the full statistics aggregate:
    // - markov_order 2 builds character chains of order 1 and 2
    // - enable_syllables adds syllable frequencies and syllable chains
    // - enable_components adds onset/nucleus/coda tables
    let config = AnalysisConfig {
        input_file: "<embedded>".to_string(),
        markov_order: 2,
        min_word_length: 2,
        enable_syllables: true,
        enable_components: true,
    };

    let results = corpus::analyze(&words, &config)?;

    // Corpus-level statistics.
    println!(
        "{} words, {:.2} characters per word on average",
        results.stats.total_words, results.stats.avg_word_length
    );
    println!(
        "{} syllables, {:.2} per word on average",
        results.stats.total_syllables, results.stats.avg_syllables_per_word
    );

    // The five most frequent bigrams (the map iterates in key order, so
    // sort by count here).
    let mut bigrams: Vec<(&String, &usize)> = results.letter_analysis.bigrams.iter().collect();
    bigrams.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
    for (bigram, count) in bigrams.iter().take(5) {
        println!("bigram {bigram}: {count}");
    }

    // Every unique syllable, in first-occurrence order.
    let syllables = results.syllable_analysis.as_ref().expect("enabled above");
    println!("unique syllables: {}", syllables.all_syllables.join(" "));

    // The order-1 character chain learned from the corpus. Contexts of
    // '^' are word starts; a '$' successor is a word end.
    let chain = results
        .letter_analysis
        .markov_chains
        .order(1)
        .expect("order 1 always exists");
    for (context, successors) in chain.iter().take(3) {
        println!("after {context:?}: {successors:?}");
    }

    Ok(())
}
