use editdist_benches::available_corpora;
use editdist_core::{CompareOptions, Metric};

#[test]
fn editdist_benches_readme_example() -> Result<(), Box<dyn std::error::Error>> {
    let corpus =
        available_corpora().into_iter().find(|c| c.name() == "typos").expect("registered corpus");
    let options = CompareOptions::default();

    let levenshtein = corpus.total_distance(Metric::Levenshtein, &options)?;
    let damerau = corpus.total_distance(Metric::DamerauLevenshtein, &options)?;
    println!("typos: levenshtein={levenshtein} damerau-levenshtein={damerau}");
    assert!(damerau < levenshtein);
    Ok(())
}
