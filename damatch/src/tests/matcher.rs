use crate::dictionary::Dictionary;
use crate::errors::DamatchError;
use crate::matcher::{Direction, Matcher};
use crate::token::{CharPositions, Token};

const DICT_TXT: &str = include_str!("./resources/dict.txt");
const TEXT: &str = "俄罗斯联邦总统普京决定在顿巴斯地区开展特别军事行动。";

fn matcher() -> Matcher {
    Matcher::new(Dictionary::from_readers(DICT_TXT.as_bytes(), None::<&[u8]>).unwrap())
}

fn surfaces<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
    tokens.iter().map(|t| t.surface()).collect()
}

#[test]
fn test_forward() {
    let matcher = matcher();
    let tokens = matcher.segment(TEXT, Direction::Forward);
    assert_eq!(
        surfaces(&tokens),
        [
            "俄罗斯联邦",
            "总统",
            "普京",
            "决定",
            "在",
            "顿巴斯",
            "地区开展",
            "特别军事行动",
            "。"
        ]
    );
    assert!(tokens[..8].iter().all(|t| !t.is_unknown()));
    assert!(tokens[8].is_unknown());
    assert_eq!(tokens[8].offset(), 75);
}

#[test]
fn test_backward() {
    let matcher = matcher();
    let tokens = matcher.segment(TEXT, Direction::Backward);
    assert_eq!(
        surfaces(&tokens),
        [
            "俄罗斯联邦",
            "总统",
            "普京",
            "决定",
            "在",
            "顿巴斯",
            "地区开展",
            "特别军事行动",
            "。"
        ]
    );
}

#[test]
fn test_parse() {
    let matcher = matcher();
    let occurrences: Vec<_> = matcher
        .parse(TEXT)
        .iter()
        .map(|t| (t.offset(), t.surface()))
        .collect();
    assert_eq!(
        occurrences,
        [
            (0, "俄罗斯"),
            (0, "俄罗斯联邦"),
            (9, "联邦"),
            (15, "总统"),
            (21, "普京"),
            (27, "决定"),
            (33, "在"),
            (36, "顿巴斯"),
            (39, "巴斯"),
            (45, "地区"),
            (45, "地区开展"),
            (51, "开展"),
            (57, "特别"),
            (57, "特别军事行动"),
            (63, "军事"),
            (63, "军事行动"),
            (69, "行动"),
        ]
    );
}

#[test]
fn test_insert_updates_queries() {
    let mut matcher = matcher();
    let num_words = matcher.num_words();
    assert_eq!(num_words, 17);

    let word_id = matcher.insert("俄罗斯联邦总统").unwrap();
    assert_eq!(word_id as usize, num_words);
    assert_eq!(matcher.insert("俄罗斯联邦总统").unwrap(), word_id);
    assert_eq!(matcher.num_words(), num_words + 1);
    assert_eq!(matcher.dictionary().max_word_len(), 21);

    let tokens = matcher.segment(TEXT, Direction::Forward);
    assert_eq!(tokens[0].surface(), "俄罗斯联邦总统");
    assert_eq!(tokens[0].word_id(), Some(word_id));

    let tokens = matcher.segment(TEXT, Direction::Backward);
    assert_eq!(tokens[0].surface(), "俄罗斯联邦总统");

    let occurrences: Vec<_> = matcher
        .parse(TEXT)
        .into_iter()
        .filter(|t| t.offset() == 0)
        .map(|t| t.surface())
        .collect();
    assert_eq!(occurrences, ["俄罗斯", "俄罗斯联邦", "俄罗斯联邦总统"]);
}

#[test]
fn test_insert_words() {
    let mut matcher = Matcher::default();
    matcher.insert_words(["自然", "语言", "自然", "处理"]).unwrap();
    assert_eq!(matcher.num_words(), 3);
    assert_eq!(matcher.dictionary().word(2), Some("处理"));
    assert_eq!(
        surfaces(&matcher.segment("自然语言处理", Direction::Forward)),
        ["自然", "语言", "处理"]
    );
}

#[test]
fn test_char_positions() {
    let matcher = matcher();
    let text = "ab普京c";
    let positions = CharPositions::new(text);
    let ranges: Vec<_> = matcher
        .segment(text, Direction::Forward)
        .iter()
        .map(|t| positions.range_char(t).unwrap())
        .collect();
    assert_eq!(ranges, [0..2, 2..4, 4..5]);
}

#[test]
fn test_from_paths() {
    let dir = tempfile::tempdir().unwrap();
    let dict_path = dir.path().join("dict.txt");
    let user_dict_path = dir.path().join("user.txt");
    std::fs::write(&dict_path, DICT_TXT).unwrap();
    std::fs::write(&user_dict_path, "俄罗斯联邦总统\n普京\n").unwrap();

    let dict = Dictionary::from_paths(&dict_path, Some(&user_dict_path)).unwrap();
    assert_eq!(dict.num_words(), 18);
    assert!(dict.word_id("俄罗斯联邦总统").is_some());

    let dict = Dictionary::from_paths(&dict_path, None::<&str>).unwrap();
    assert_eq!(dict.num_words(), 17);
}

#[test]
fn test_from_paths_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let dict_path = dir.path().join("dict.txt");
    std::fs::write(&dict_path, DICT_TXT).unwrap();
    let missing = dir.path().join("missing.txt");

    match Dictionary::from_paths(&dict_path, Some(&missing)) {
        Err(DamatchError::SourceUnavailable(e)) => assert_eq!(e.path(), missing.as_path()),
        _ => panic!("a missing user dictionary must be reported"),
    }
    assert!(matches!(
        Dictionary::from_paths(&missing, None::<&str>),
        Err(DamatchError::SourceUnavailable(_))
    ));
}

#[test]
fn test_directions_differ() {
    let mut matcher = Matcher::default();
    matcher.insert_words(["研究", "研究生", "生命", "起源"]).unwrap();
    let text = "研究生命起源";
    assert_eq!(
        surfaces(&matcher.segment(text, Direction::Forward)),
        ["研究生", "命", "起源"]
    );
    assert_eq!(
        surfaces(&matcher.segment(text, Direction::Backward)),
        ["研究", "生命", "起源"]
    );
}

#[test]
fn test_nul_in_text() {
    let matcher =
        Matcher::new(Dictionary::from_readers("a\nab\n".as_bytes(), None::<&[u8]>).unwrap());
    let pairs = |tokens: Vec<Token>| -> Vec<(usize, String, Option<u32>)> {
        tokens
            .iter()
            .map(|t| (t.offset(), t.surface().to_string(), t.word_id()))
            .collect()
    };
    let expected = vec![(0, "a".to_string(), Some(0)), (1, "\0".to_string(), None)];
    assert_eq!(pairs(matcher.segment("a\0", Direction::Forward)), expected);
    assert_eq!(pairs(matcher.segment("a\0", Direction::Backward)), expected);
    assert_eq!(pairs(matcher.parse("a\0")), [(0, "a".to_string(), Some(0))]);
    assert_eq!(matcher.dictionary().word_id("a\0"), None);
}

#[test]
fn test_nul_in_words() {
    let mut matcher =
        Matcher::new(Dictionary::from_readers("a\na\0\nab\n".as_bytes(), None::<&[u8]>).unwrap());
    assert_eq!(matcher.dictionary().word_id("a\0"), Some(1));
    assert_eq!(matcher.insert("a\0").unwrap(), 1);
    assert_eq!(matcher.insert("b\0c").unwrap(), 3);
    assert_eq!(
        surfaces(&matcher.segment("aba\0b\0c", Direction::Forward)),
        ["ab", "a\0", "b\0c"]
    );
    assert_eq!(surfaces(&matcher.parse("a\0")), ["a", "a\0"]);
}
