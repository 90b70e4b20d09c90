//! Text splitting utilities.

/// Split text into whitespace-delimited words, dropping empty tokens.
///
/// Punctuation stays attached to its word, so `"next.js"` is one token.
pub fn split_words(text: &str) -> Vec<String> {
  text.split_whitespace().map(str::to_string).collect()
}

/// Count how many of `words` occur as substrings of `haystack`.
pub fn count_contained<'a, I>(haystack: &str, words: I) -> usize
where
  I: IntoIterator<Item = &'a str>,
{
  words
    .into_iter()
    .filter(|word| haystack.contains(word))
    .count()
}
