pub mod keyword_scorer;
mod sentiment_lexicon;
pub mod sentiment_scorer;
