#[cfg(test)]
#[path = "summarizer_test.rs"]
mod tests;

use std::collections::HashMap;

/// Shortest input, in characters, the summarize action accepts.
pub const SUMMARY_MIN_CHARS: usize = 150;

const SUMMARY_SENTENCES: usize = 3;
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];
const STOP_WORDS: [&str; 23] = [
    "the", "and", "a", "an", "of", "in", "to", "is", "it", "that", "this", "for", "on", "with",
    "as", "at", "by", "be", "are", "was", "were", "or", "from",
];

#[derive(Clone, Debug, PartialEq, Eq)]
struct SentenceScore<'a> {
    sentence: &'a str,
    position: usize,
    score: u64,
}

/// Splits text into sentences, each keeping its run of trailing terminators.
/// A trailing fragment without a terminator is dropped, as is a run made only
/// of terminators.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences: Vec<&str> = vec![];
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !SENTENCE_TERMINATORS.contains(&c) {
            continue;
        }

        let mut end = idx + c.len_utf8();
        while let Some((next_idx, next_c)) = chars.peek().copied() {
            if !SENTENCE_TERMINATORS.contains(&next_c) {
                break;
            }
            end = next_idx + next_c.len_utf8();
            chars.next();
        }

        let sentence = &text[start..end];
        if sentence.chars().any(|e| return !SENTENCE_TERMINATORS.contains(&e)) {
            sentences.push(sentence);
        }
        start = end;
    }

    return sentences;
}

/// Lowercased alphanumeric runs.
pub fn tokenize(text: &str) -> Vec<String> {
    return text
        .split(|c: char| return !c.is_alphanumeric())
        .filter(|e| return !e.is_empty())
        .map(|e| return e.to_lowercase())
        .collect();
}

fn word_frequencies(text: &str) -> HashMap<String, u64> {
    let mut frequencies: HashMap<String, u64> = HashMap::new();
    for token in tokenize(text) {
        if STOP_WORDS.contains(&token.as_str()) {
            continue;
        }
        *frequencies.entry(token).or_insert(0) += 1;
    }

    return frequencies;
}

fn score_sentences<'a>(
    sentences: &[&'a str],
    frequencies: &HashMap<String, u64>,
) -> Vec<SentenceScore<'a>> {
    return sentences
        .iter()
        .enumerate()
        .map(|(position, sentence)| {
            let score: u64 = tokenize(sentence)
                .iter()
                .map(|token| return frequencies.get(token).copied().unwrap_or(0))
                .sum();

            return SentenceScore {
                sentence: *sentence,
                position,
                score,
            };
        })
        .collect();
}

/// Extractive summary: keeps the highest scoring sentences in their source
/// order. Text with fewer than two sentences comes back unchanged.
pub fn summarize(text: &str) -> String {
    let sentences = split_sentences(text);
    if sentences.len() < 2 {
        return text.to_string();
    }

    let frequencies = word_frequencies(text);
    let mut scored = score_sentences(&sentences, &frequencies);

    // Stable, so equal scores keep source order.
    scored.sort_by(|a, b| return b.score.cmp(&a.score));
    scored.truncate(SUMMARY_SENTENCES);
    scored.sort_by_key(|e| return e.position);

    return scored
        .iter()
        .map(|e| return e.sentence.trim())
        .collect::<Vec<&str>>()
        .join(" ");
}
