use matchle::{Filter, NGram, NGramMatcher};

fn ngram(word: &str) -> NGram {
    NGram::from_word(word).unwrap()
}

fn matching(key: &str, guess: &str) -> Filter {
    let key = ngram(key);
    let guess = ngram(guess);
    NGramMatcher::of(&key, &guess).matching()
}

#[test]
fn test_identical_key_and_guess() {
    let filter = matching("hello", "hello");
    assert!(filter.test(&ngram("hello")));
    assert!(!filter.test(&ngram("world")));
}

#[test]
fn test_near_miss_guess() {
    // "hella" vs key "hello": four exact matches, final 'a' absent
    let filter = matching("hello", "hella");
    assert!(filter.test(&ngram("hello")));
    assert!(!filter.test(&ngram("world")));
    // "hellx" keeps the four exact positions and avoids 'a'
    assert!(filter.test(&ngram("hellx")));
    // 'a' anywhere is inconsistent
    assert!(!filter.test(&ngram("haxes")));
}

#[test]
fn test_length_mismatch_rejects_everything() {
    let key = ngram("hello");
    let guess = ngram("hi");
    let filter = NGramMatcher::of(&key, &guess).matching();
    assert!(!filter.test(&key));
    assert!(!filter.test(&guess));
    assert!(!filter.test(&ngram("other")));
}

#[test]
fn test_zero_length_inputs_are_vacuously_true() {
    let filter = matching("", "");
    assert!(filter.test(&ngram("")));
    assert!(filter.test(&ngram("anything")));
}

#[test]
fn test_key_always_survives_its_own_filter() {
    let keys = ["hello", "world", "aabb", "abab", "speed", "geese"];
    let guesses = ["crane", "aabba", "abab", "hello", "eeeee"];
    for key in keys {
        for guess in guesses {
            if key.len() != guess.len() {
                continue;
            }
            let filter = matching(key, guess);
            assert!(
                filter.test(&ngram(key)),
                "key {key} rejected by its own filter for guess {guess}"
            );
        }
    }
}

#[test]
fn test_duplicate_letters_greedy_budget() {
    // key = "aabb", guess = "abab":
    //   pos 0: 'a' exact, pos 3: 'b' exact
    //   pos 1: 'b' misplaced (one 'b' left), pos 2: 'a' misplaced (one 'a' left)
    //   no absents
    let filter = matching("aabb", "abab");
    assert!(filter.test(&ngram("aabb")));
    // Same exact positions, contains both letters
    assert!(filter.test(&ngram("abab")));
    assert!(filter.test(&ngram("acab")));
    // Wrong character at an exact position
    assert!(!filter.test(&ngram("bbaa")));
    assert!(!filter.test(&ngram("aaba")));
}

#[test]
fn test_misplaced_consumes_frequency_left_to_right() {
    // key = "speed", guess = "creep":
    //   'e' at 2 and 3 exact, 'p' at 4 misplaced, 'c' and 'r' absent
    let filter = matching("speed", "creep");
    assert!(filter.test(&ngram("speed")));
    assert!(!filter.test(&ngram("creep"))); // contains the absent 'c'
    assert!(!filter.test(&ngram("spade"))); // 'e' not at position 2
    // s-h-e-e-p: exact 'e's at 2 and 3, contains 'p', no 'c' or 'r'
    assert!(filter.test(&ngram("sheep")));
}

#[test]
fn test_exhausted_duplicate_adds_no_contradiction() {
    // key = "abcd", guess = "aaxx": first 'a' exact, second 'a' has no
    // budget left but the key does contain 'a', so no exclusion is added.
    let filter = matching("abcd", "aaxx");
    assert!(filter.test(&ngram("abcd")));
    // 'x' is genuinely absent
    assert!(!filter.test(&ngram("axcd")));
    // exact 'a' at position 0 is required
    assert!(!filter.test(&ngram("bacd")));
}

#[test]
fn test_guess_with_no_key_letters() {
    // key shares nothing with guess: every guess letter excluded
    let filter = matching("dream", "quick");
    assert!(filter.test(&ngram("dream")));
    assert!(!filter.test(&ngram("quick")));
    assert!(!filter.test(&ngram("track"))); // contains 'c' and 'k'
    assert!(filter.test(&ngram("horse")));
}

#[test]
fn test_duplicate_key_letters_unmatched_by_guess() {
    // key = "geese", guess = "lolly": no constraint mentions 'g', 'e' or 's'
    let filter = matching("geese", "lolly");
    assert!(filter.test(&ngram("geese")));
    // words without l/o/y are all consistent
    assert!(filter.test(&ngram("crane")));
    assert!(!filter.test(&ngram("bully")));
}
