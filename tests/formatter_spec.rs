use emoji_core::{EmojiFormatter, EmojiToken, FrequencyEntry};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

fn formatter() -> EmojiFormatter {
    EmojiFormatter::bundled().expect("bundled table parses")
}

#[test]
fn extract_emoji_finds_offsets() {
    assert_eq!(
        formatter().extract_emoji("Hello 👋 world 🌍!"),
        vec![EmojiToken::new("👋", 6, 7), EmojiToken::new("🌍", 14, 15)]
    );
}

#[test]
fn remove_from_text_strips_emoji() {
    assert_eq!(formatter().remove_from_text("Hi 👋🌍!"), "Hi !");
}

#[test]
fn lengths_with_and_without_emoji() {
    let f = formatter();
    assert_eq!(f.text_length("Test 🚀"), 5);
    assert_eq!(f.length_with_emojis("Test 🚀"), 6);
}

#[test]
fn has_emoji_detects_presence() {
    let f = formatter();
    assert!(!f.has_emoji("No emoji here"));
    assert!(f.has_emoji("One 😊 here"));
}

#[test]
fn only_emojis_and_strip() {
    let f = formatter();
    assert_eq!(f.only_emojis("Hey 🌟✨"), vec!["🌟", "✨"]);
    assert_eq!(f.strip_all_but_emojis("Hi 💥 there 🎉!"), "💥🎉");
}

#[test]
fn normalize_skin_tones_keeps_base() {
    assert_eq!(formatter().normalize_skin_tones("👍🏽"), "👍");
}

#[test]
fn frequency_sorted_highest_first() {
    assert_eq!(
        formatter().emoji_frequency_sorted("🔥🔥💧💧💧"),
        vec![
            FrequencyEntry { cluster: "💧".into(), count: 3 },
            FrequencyEntry { cluster: "🔥".into(), count: 2 },
        ]
    );
}

#[test]
fn annotate_wraps_in_tags() {
    assert_eq!(formatter().annotate_text("Go 🚗 now"), "Go <emoji>🚗</emoji> now");
}

#[test]
fn first_emoji_or_none() {
    let f = formatter();
    assert_eq!(f.get_first_emoji("Some 🎯 emoji"), Some("🎯"));
    assert_eq!(f.get_first_emoji("No emoji"), None);
}

#[test]
fn remove_duplicates_keeps_first() {
    assert_eq!(formatter().remove_duplicates("😄😄😃😄"), "😄😃");
}

#[test]
fn filter_by_emoji_set_keeps_offsets() {
    let allowed: HashSet<&str> = ["🌍", "👍"].into_iter().collect();
    assert_eq!(
        formatter().filter_by_emoji_set("👋🌍✨👍", &allowed),
        vec![EmojiToken::new("🌍", 1, 2), EmojiToken::new("👍", 3, 4)]
    );
}

#[test]
fn format_restores_emoji() {
    let tokens = [EmojiToken::new("🎯", 1, 2), EmojiToken::new("🚀", 3, 4)];
    assert_eq!(formatter().format(&tokens, "abcde").unwrap(), "a🎯c🚀e");
}

#[test]
fn is_only_emoji_rejects_text_and_spaces() {
    let f = formatter();
    assert!(f.is_only_emoji("😊👍"));
    assert!(!f.is_only_emoji("😊 text"));
    assert!(!f.is_only_emoji("😊 👍"));
}

#[test]
fn count_unique_counts_each_cluster() {
    let counts = formatter().count_unique("🔥 hi 🔥💧👍🏽👍");
    assert_eq!(counts.len(), 4);
    assert_eq!(counts["🔥"], 2);
    assert_eq!(counts["👍🏽"], 1);
    assert_eq!(counts["👍"], 1);
}

#[test]
fn replace_emojis_with_names() {
    let f = formatter();
    let replaced = f.replace_emojis("I 💧 and 🔥", |e| match e {
        "💧" => ":droplet:",
        "🔥" => ":fire:",
        _ => "?",
    });
    assert_eq!(replaced, "I :droplet: and :fire:");
}

// Composite clusters must come out whole.

#[test]
fn joined_family_is_one_token() {
    let family = "👨\u{200D}👩\u{200D}👧\u{200D}👦";
    let tokens = formatter().extract_emoji(&format!("us: {family}!"));
    assert_eq!(tokens, vec![EmojiToken::new(family, 4, 11)]);
}

#[test]
fn flags_pair_up() {
    let f = formatter();
    assert_eq!(f.only_emojis("🇳🇵🇯🇵 trip"), vec!["🇳🇵", "🇯🇵"]);
    assert_eq!(f.extract_emoji("🇳🇵")[0], EmojiToken::new("🇳🇵", 0, 2));
}

#[test]
fn toned_gesture_is_not_split() {
    let f = formatter();
    assert_eq!(f.only_emojis("👍🏽👍🏿👍"), vec!["👍🏽", "👍🏿", "👍"]);
    assert_eq!(f.remove_from_text("ok 👍🏽"), "ok ");
}

#[test]
fn toned_zwj_sequence() {
    let coder = "👩🏽\u{200D}💻";
    assert_eq!(formatter().only_emojis(coder), vec![coder]);
}

#[test]
fn keycap_and_selector_sequences() {
    let f = formatter();
    assert_eq!(f.only_emojis("#\u{FE0F}\u{20E3} 1\u{FE0F}\u{20E3}"), vec!["#\u{FE0F}\u{20E3}", "1\u{FE0F}\u{20E3}"]);
    assert_eq!(f.only_emojis("❤\u{FE0F}\u{200D}🔥"), vec!["❤\u{FE0F}\u{200D}🔥"]);
    assert_eq!(f.only_emojis("❤\u{FE0F}"), vec!["❤\u{FE0F}"]);
}

#[test]
fn unknown_sequences_fall_back_to_parts() {
    let f = formatter();
    // Not in the table: the joiner is left behind, the parts still match.
    let text = "👨\u{200D}🐉";
    assert_eq!(
        f.extract_emoji(text),
        vec![EmojiToken::new("👨", 0, 1), EmojiToken::new("🐉", 2, 3)]
    );
    assert_eq!(f.remove_from_text(text), "\u{200D}");
    // Bare heart without its selector is not fully-qualified.
    assert!(!f.has_emoji("\u{2764}"));
    // A selector after an emoji that does not take one is left as filler.
    assert_eq!(f.remove_from_text("✨\u{FE0F}"), "\u{FE0F}");
}

#[test]
fn role_and_gendered_sequences_are_single_tokens() {
    let f = formatter();
    let astronaut = "👨\u{200D}🚀";
    assert_eq!(f.extract_emoji(astronaut), vec![EmojiToken::new(astronaut, 0, 3)]);

    let detective = "🕵\u{FE0F}\u{200D}♀\u{FE0F}";
    let text = format!("a {detective} b");
    assert_eq!(f.extract_emoji(&text), vec![EmojiToken::new(detective, 2, 7)]);
    assert_eq!(f.remove_from_text(&text), "a  b");

    let dancers = "👯\u{200D}♀\u{FE0F}";
    assert!(f.is_only_emoji(dancers));
    assert_eq!(f.length_with_emojis(dancers), 4);
    assert_eq!(f.text_length(dancers), 0);

    let kiss = "👩\u{200D}❤\u{FE0F}\u{200D}💋\u{200D}👨";
    assert_eq!(f.only_emojis(kiss), vec![kiss]);
}

#[test]
fn symbol_blocks_and_subdivision_flags() {
    let f = formatter();
    assert_eq!(f.only_emojis("\u{1F004} tile"), vec!["\u{1F004}"]);
    assert_eq!(f.only_emojis("🅰\u{FE0F}🈁"), vec!["🅰\u{FE0F}", "🈁"]);
    assert_eq!(
        f.extract_emoji("🇪🇺🇺🇳🇦🇨"),
        vec![
            EmojiToken::new("🇪🇺", 0, 2),
            EmojiToken::new("🇺🇳", 2, 4),
            EmojiToken::new("🇦🇨", 4, 6),
        ]
    );
    assert_eq!(f.only_emojis("🏳\u{FE0F}\u{200D}🌈"), vec!["🏳\u{FE0F}\u{200D}🌈"]);
}

#[test]
fn recent_emoji_versions_are_known() {
    let f = formatter();
    // 14.0, 15.0 and 15.1 additions.
    assert_eq!(f.only_emojis("🫠 🫨 🩷 🫎"), vec!["🫠", "🫨", "🩷", "🫎"]);
    let shaking = "🙂\u{200D}↔\u{FE0F}";
    assert_eq!(f.extract_emoji(shaking), vec![EmojiToken::new(shaking, 0, 4)]);
    let family = "🧑\u{200D}🧑\u{200D}🧒";
    assert_eq!(f.extract_emoji(family), vec![EmojiToken::new(family, 0, 5)]);
}

#[test]
fn empty_input_is_total() {
    let f = formatter();
    assert!(f.extract_emoji("").is_empty());
    assert_eq!(f.remove_from_text(""), "");
    assert_eq!(f.text_length(""), 0);
    assert_eq!(f.get_first_emoji(""), None);
    assert!(f.emoji_frequency_sorted("").is_empty());
    assert_eq!(f.annotate_text(""), "");
}

#[test]
fn shared_across_threads() {
    let f = formatter();
    let texts = ["a🔥b", "💧💧", "none", "👍🏽!"];
    let expected: Vec<_> = texts.iter().map(|t| f.extract_emoji(t)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = texts
            .iter()
            .map(|t| {
                let f = &f;
                scope.spawn(move || f.extract_emoji(t))
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, expected);
    });
}
