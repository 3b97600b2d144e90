//! Synthetic datasets for the "Use Mock Data" switch.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::models::{Comment, Word, WordTitle};

const TITLES: [(&str, &str); 24] = [
    ("Hello", "Salom"),
    ("Goodbye", "Xayr"),
    ("Thank you", "Rahmat"),
    ("Please", "Iltimos"),
    ("Yes", "Ha"),
    ("No", "Yo'q"),
    ("Book", "Kitob"),
    ("Computer", "Kompyuter"),
    ("Phone", "Telefon"),
    ("Car", "Mashina"),
    ("House", "Uy"),
    ("School", "Maktab"),
    ("Friend", "Do'st"),
    ("Family", "Oila"),
    ("Love", "Sevgi"),
    ("Hate", "Nafrat"),
    ("Happy", "Baxtli"),
    ("Sad", "Xafa"),
    ("Big", "Katta"),
    ("Small", "Kichik"),
    ("Fast", "Tez"),
    ("Slow", "Sekin"),
    ("Hot", "Issiq"),
    ("Cold", "Sovuq"),
];

const SYNONYMS: [&str; 3] = ["synonym1", "synonym2", "synonym3"];
const ANAGRAMS: [&str; 2] = ["anagram1", "anagram2"];

const COMMENTED_WORDS: [(&str, &str, &str); 6] = [
    ("1", "Hello", "Salom"),
    ("2", "Goodbye", "Xayr"),
    ("3", "Thank you", "Rahmat"),
    ("4", "Please", "Iltimos"),
    ("5", "Yes", "Ha"),
    ("6", "No", "Yo'q"),
];

const USERNAMES: [Option<&str>; 8] = [
    Some("user123"),
    Some("language_lover"),
    Some("student2023"),
    Some("teacher_john"),
    Some("learner_smith"),
    Some("polyglot42"),
    None,
    Some("word_enthusiast"),
];

const COMMENT_TEXTS: [&str; 10] = [
    "This word is very useful in everyday conversations.",
    "I've been struggling with the pronunciation of this word.",
    "Could someone provide more examples of how to use this in a sentence?",
    "The translation seems incorrect. I think it should be different.",
    "I love how this word sounds! It's so melodic.",
    "This is one of the first words I learned in this language.",
    "Is there a more formal version of this word for official settings?",
    "The example sentences really helped me understand the usage.",
    "Are there any idioms or expressions that use this word?",
    "I think the definition could be clearer with more context.",
];

pub fn mock_id(n: usize) -> String {
    format!("mock-{n}")
}

fn iso(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Created within the last 30 days; three records in ten were edited up to
/// 48 hours later.
fn timestamps(rng: &mut dyn RngCore) -> (String, String) {
    let created = Utc::now() - Duration::days(rng.gen_range(0..30));
    let updated = if rng.gen_bool(0.3) {
        created + Duration::hours(rng.gen_range(0..48))
    } else {
        created
    };
    (iso(created), iso(updated))
}

fn prefix(items: &[&str], len: usize) -> Vec<String> {
    items.iter().take(len).map(|s| s.to_string()).collect()
}

pub fn generate_words(count: usize, rng: &mut dyn RngCore) -> Vec<Word> {
    (0..count)
        .map(|index| {
            let (title_eng, title_uz) = TITLES[rng.gen_range(0..TITLES.len())];
            let (created_at, updated_at) = timestamps(rng);
            Word {
                id: mock_id(index + 1),
                title_eng: title_eng.to_string(),
                title_uz: title_uz.to_string(),
                transcription: Some(format!("/{}/", title_eng.to_lowercase())),
                usage_frequency: Some(rng.gen_range(0..100)),
                synonyms: prefix(&SYNONYMS, rng.gen_range(1..=3)),
                anagrams: prefix(&ANAGRAMS, rng.gen_range(1..=2)),
                created_at,
                updated_at,
                definitions_count: Some(rng.gen_range(1..=5)),
                examples_count: Some(rng.gen_range(1..=10)),
                verb_forms_count: Some(rng.gen_range(0..3)),
                bookmarks_count: Some(rng.gen_range(0..20)),
                comments_count: Some(rng.gen_range(0..15)),
                ..Word::default()
            }
        })
        .collect()
}

pub fn generate_comments(count: usize, rng: &mut dyn RngCore) -> Vec<Comment> {
    (0..count)
        .map(|index| {
            let (word_id, title_eng, title_uz) = COMMENTED_WORDS[rng.gen_range(0..COMMENTED_WORDS.len())];
            let username = USERNAMES.choose(rng).copied().flatten();
            let text = COMMENT_TEXTS.choose(rng).copied().unwrap_or_default();
            let (created_at, updated_at) = timestamps(rng);
            Comment {
                id: mock_id(index + 1),
                text: text.to_string(),
                username: username.map(str::to_string),
                word_id: Some(word_id.to_string()),
                created_at,
                updated_at,
                word: Some(WordTitle {
                    title_eng: title_eng.to_string(),
                    title_uz: title_uz.to_string(),
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn words_follow_the_vocabulary() {
        let mut rng = SmallRng::seed_from_u64(7);
        let words = generate_words(50, &mut rng);

        assert_eq!(words.len(), 50);
        assert_eq!(words[0].id, "mock-1");
        assert_eq!(words[49].id, "mock-50");
        for word in &words {
            let pair = TITLES
                .iter()
                .find(|(eng, _)| *eng == word.title_eng)
                .expect("title from vocabulary");
            assert_eq!(word.title_uz, pair.1);
            assert_eq!(
                word.transcription.as_deref(),
                Some(format!("/{}/", word.title_eng.to_lowercase()).as_str())
            );
            assert!((1..=3).contains(&word.synonyms.len()));
            assert!((1..=2).contains(&word.anagrams.len()));
            assert!(word.usage_frequency.unwrap() < 100);
            assert!(word.updated_at >= word.created_at);
        }
    }

    #[test]
    fn comments_reference_their_word() {
        let mut rng = SmallRng::seed_from_u64(11);
        for comment in generate_comments(50, &mut rng) {
            let word = comment.word.expect("word snapshot");
            let entry = COMMENTED_WORDS
                .iter()
                .find(|(id, _, _)| Some(*id) == comment.word_id.as_deref())
                .expect("known word id");
            assert_eq!(word.title_eng, entry.1);
            assert!(COMMENT_TEXTS.contains(&comment.text.as_str()));
        }
    }
}
