use std::sync::Arc;
use std::thread;

use wordbank::config::WordbankConfig;
use wordbank::error::{ErrorKind, Result};
use wordbank::service::WordService;
use wordbank::storage::memory::{MemoryStorageConfig, MemoryWordStore};
use wordbank::storage::{StorageConfig, StorageFactory, WordStore};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn memory_service() -> Result<WordService> {
    let store = StorageFactory::create(StorageConfig::Memory(MemoryStorageConfig::default()))?;
    WordService::new(store)
}

#[test]
fn test_create_view_score_flow() -> Result<()> {
    init_logging();
    let service = memory_service()?;

    let hello = service.create_word("hello")?;
    let racecar = service.create_word("racecar")?;
    let a = service.create_word("a")?;
    let long = service.create_word("abcdefghij")?;

    assert_eq!(hello.id, 1);
    assert_eq!(racecar.id, 2);

    let analysis = service.view_word(racecar.id)?;
    assert!(analysis.is_palindrome);
    assert_eq!(analysis.total_characters, 7);
    assert_eq!(analysis.vowel_count, 3);
    assert_eq!(analysis.consonant_count, 4);

    let analysis = service.view_word(hello.id)?;
    assert!(!analysis.is_palindrome);
    assert_eq!(analysis.letter_frequency.get(&'l'), Some(&2));

    let result = service.score_words(a.id, long.id)?;
    assert_eq!(result.first_word, "a");
    assert_eq!(result.second_word, "abcdefghij");
    assert_eq!(result.score, 10);

    Ok(())
}

#[test]
fn test_rejections_leave_store_unchanged() -> Result<()> {
    init_logging();
    let service = memory_service()?;
    service.create_word("hello")?;

    let cases = [
        ("hello", ErrorKind::DuplicateWord),
        ("hi there", ErrorKind::InvalidWord),
        ("abc123", ErrorKind::InvalidWord),
        ("", ErrorKind::InvalidWord),
    ];

    for (value, expected) in cases {
        let err = service.create_word(value).unwrap_err();
        assert_eq!(err.kind(), expected, "value: {value:?}");
        assert!(err.is_client_error());
    }

    assert_eq!(service.store().count()?, 1);
    Ok(())
}

#[test]
fn test_uppercase_vowels_are_counted_as_consonants() -> Result<()> {
    // Only lowercase a, e, i, o, u count as vowels, even though stored words
    // may contain uppercase letters. Pinned so a change here is deliberate.
    let service = memory_service()?;
    let word = service.create_word("AEIOU")?;

    let analysis = service.view_word(word.id)?;
    assert_eq!(analysis.total_characters, 5);
    assert_eq!(analysis.vowel_count, 0);
    assert_eq!(analysis.consonant_count, 5);
    assert_eq!(analysis.letter_frequency.get(&'a'), Some(&1));

    Ok(())
}

#[test]
fn test_reads_are_idempotent() -> Result<()> {
    let service = memory_service()?;
    let first = service.create_word("level")?;
    let second = service.create_word("levels")?;

    assert_eq!(service.view_word(first.id)?, service.view_word(first.id)?);
    assert_eq!(
        service.score_words(first.id, second.id)?,
        service.score_words(first.id, second.id)?
    );
    assert_eq!(service.store().count()?, 2);

    Ok(())
}

#[test]
fn test_score_with_missing_id() -> Result<()> {
    let service = memory_service()?;
    let word = service.create_word("hello")?;

    let err = service.score_words(word.id, word.id + 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = service.view_word(word.id + 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    Ok(())
}

#[test]
fn test_concurrent_creates_of_same_word() -> Result<()> {
    init_logging();
    let store: Arc<dyn WordStore> = Arc::new(MemoryWordStore::new_default());
    let service = WordService::new(store)?;

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let service = service.clone();
            thread::spawn(move || service.create_word("contended").map_err(|e| e.kind()))
        })
        .collect();

    let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let created = outcomes.iter().filter(|o| o.is_ok()).count();
    let duplicates = outcomes
        .iter()
        .filter(|o| matches!(o, Err(ErrorKind::DuplicateWord)))
        .count();

    assert_eq!(created, 1);
    assert_eq!(duplicates, 15);
    assert_eq!(service.store().count()?, 1);

    Ok(())
}

#[test]
fn test_service_from_config() -> Result<()> {
    let config = WordbankConfig::from_json_str(
        r#"{"storage": {"type": "memory"}, "min_word_length": 2, "max_word_length": 4}"#,
    )?;
    let service = WordService::from_config(&config)?;

    assert_eq!(
        service.create_word("a").unwrap_err().kind(),
        ErrorKind::InvalidWord
    );
    assert_eq!(
        service.create_word("abcde").unwrap_err().kind(),
        ErrorKind::InvalidWord
    );
    assert_eq!(service.create_word("abcd")?.id, 1);

    Ok(())
}

#[test]
fn test_analysis_serializes_with_public_field_names() -> Result<()> {
    let service = memory_service()?;
    let first = service.create_word("abba")?;
    let second = service.create_word("abc")?;

    let json = serde_json::to_value(service.view_word(first.id)?)?;
    assert_eq!(
        json,
        serde_json::json!({
            "word": "abba",
            "isPalindrome": true,
            "totalCharacters": 4,
            "vowelCount": 2,
            "consonantCount": 2,
            "letterFrequency": {"a": 2, "b": 2}
        })
    );

    let json = serde_json::to_value(service.score_words(first.id, second.id)?)?;
    assert_eq!(
        json,
        serde_json::json!({"firstWord": "abba", "secondWord": "abc", "score": 75})
    );

    Ok(())
}
