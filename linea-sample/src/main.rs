use linea::{Pipeline, PipelineError};
use std::collections::HashSet;
use std::error::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const TEXT: &str = "The quick brown fox, jumping over the lazy dog, suddenly stopped.";

fn tokenize(paragraph: &str) -> Vec<String> {
    paragraph
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn remove_stopwords(tokens: Vec<String>) -> Vec<String> {
    let stop_words: HashSet<&str> = ["the", "over", "suddenly"].into_iter().collect();
    tokens
        .into_iter()
        .filter(|token| !stop_words.contains(token.as_str()))
        .collect()
}

fn uppercase(tokens: Vec<String>) -> Vec<String> {
    tokens.iter().map(|token| token.to_uppercase()).collect()
}

fn divmod(a: u32, b: u32) -> (u32, u32) {
    (a / b, a % b)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("linea=debug,info")),
        )
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let shout = Pipeline::new()
        .then(tokenize)
        .then(remove_stopwords)
        .then(uppercase);
    info!(tokens = ?shout.call((TEXT,)), "Text pipeline finished");

    let quotient = Pipeline::new()
        .then_unpack(divmod, "tuple")?
        .then(|q: u32, r: u32| format!("{q}-{r}"));
    info!(result = %quotient.call((17, 5)), "Divmod pipeline finished");

    // Unknown unpack modes are rejected while building, before anything runs.
    match Pipeline::new().then_unpack(divmod, "bogus") {
        Ok(_) => info!("Unexpectedly accepted unpack mode"),
        Err(PipelineError::UnsupportedUnpack(mode)) => {
            error!(%mode, "Rejected unpack mode");
        }
    }

    Ok(())
}
