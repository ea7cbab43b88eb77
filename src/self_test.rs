// --test で実行される組み込みテスト
use anyhow::{ensure, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::renban::{
    converter::RenbanConverter,
    counter::MarkCounter,
    displayer::{bu_kanji, plain_zenkaku, sho_zenkaku},
    pattern::renban_pattern_source,
    SectionLevel,
};

const PATTERN_SEC1: &str = "[^@](?P<tag>@{1}(?P<name>[0-9a-zA-Z_]+))";
const PATTERN_SEC2: &str = "[^@](?P<tag>@{2}(?P<name>[0-9a-zA-Z_]+))";
const PATTERN_SEC3: &str = "[^@](?P<tag>@{3}(?P<name>[0-9a-zA-Z_]+))";

static REGEX_SEC1: Lazy<Regex> = Lazy::new(|| Regex::new(PATTERN_SEC1).unwrap());
static REGEX_SEC2: Lazy<Regex> = Lazy::new(|| Regex::new(PATTERN_SEC2).unwrap());
static REGEX_SEC3: Lazy<Regex> = Lazy::new(|| Regex::new(PATTERN_SEC3).unwrap());

fn matched_tags<'a>(pattern: &Regex, line: &'a str) -> Vec<&'a str> {
    pattern
        .captures_iter(line)
        .filter_map(|caps| caps.name("tag"))
        .map(|tag| tag.as_str())
        .collect()
}

fn ensure_matches(pattern: &Regex, line: &str, expected: &[&str]) -> Result<()> {
    let tags = matched_tags(pattern, line);
    ensure!(
        tags == expected,
        "{:?} on {:?}: expected {:?}, got {:?}",
        pattern.as_str(),
        line,
        expected,
        tags
    );
    Ok(())
}

fn test_patterns() -> Result<()> {
    log::info!("==== patterns ====");

    log::info!("小見出しのみマッチ");
    ensure_matches(&REGEX_SEC3, "# @n 大見出し", &[])?;
    ensure_matches(&REGEX_SEC3, "# @@n 中見出し", &[])?;
    ensure_matches(&REGEX_SEC3, "# @@@n 小見出し", &["@@@n"])?;

    log::info!("中見出しのみマッチ");
    ensure_matches(&REGEX_SEC2, "# @n 大見出し", &[])?;
    ensure_matches(&REGEX_SEC2, "# @@n 中見出し", &["@@n"])?;
    ensure_matches(&REGEX_SEC2, "# @@@n 小見出し", &[])?;

    log::info!("大見出しのみマッチ");
    ensure_matches(&REGEX_SEC1, "# @n 大見出し", &["@n"])?;
    ensure_matches(&REGEX_SEC1, "# @@n 中見出し", &[])?;
    ensure_matches(&REGEX_SEC1, "# @@@n 小見出し", &[])?;

    log::info!("中見出しのみマッチ (2 文字以上の名前でもよい)");
    ensure_matches(&REGEX_SEC2, "# @chapter 大見出し", &[])?;
    ensure_matches(&REGEX_SEC2, "# @@part 中見出し", &["@@part"])?;
    ensure_matches(&REGEX_SEC2, "# @@@section 小見出し", &[])?;

    log::info!("メールアドレスは大見出しにマッチする (名前が n / p でなければ無視される)");
    ensure!(
        !matched_tags(&REGEX_SEC1, "# test@test.emailaddress.com 大見出し").is_empty(),
        "An e-mail address should match the level 1 pattern"
    );

    log::info!("@ + レベル1, @ + レベル3");
    ensure!(renban_pattern_source('@', SectionLevel::Oh) == PATTERN_SEC1);
    ensure!(renban_pattern_source('@', SectionLevel::Naka) == PATTERN_SEC2);
    ensure!(renban_pattern_source('@', SectionLevel::Ko) == PATTERN_SEC3);

    Ok(())
}

fn test_mark_counter() -> Result<()> {
    log::info!("==== mark counter ====");

    let mut sec1_counter = MarkCounter::new();
    let mut sec2_counter = MarkCounter::new();
    let mut sec3_counter = MarkCounter::new();
    sec1_counter
        .set_subsection(&sec2_counter)
        .set_subsection(&sec3_counter);
    sec2_counter.set_subsection(&sec3_counter);
    sec1_counter
        .set_displayer(sho_zenkaku)
        .set_displayer(bu_kanji);
    sec2_counter.set_displayer(plain_zenkaku);

    sec1_counter.count("p"); // 第一部
    sec1_counter.count("n"); // 1
    sec1_counter.count("n"); // 2
    sec2_counter.count("n"); // 2-1
    sec2_counter.count("n"); // 2-2
    sec3_counter.count("n"); // 2-2-1
    sec1_counter.count("p"); // 第二部
    sec1_counter.count("n"); // 3
    sec2_counter.count("n"); // 3-1
    sec3_counter.count("n"); // 3-1-1
    sec3_counter.count("n"); // 3-1-2
    log::info!("LV1 {}", sec1_counter);
    log::info!("LV2 {}", sec2_counter);
    log::info!("LV3 {}", sec3_counter);

    ensure!(sec1_counter.get_displaytext("n")? == "第３章");
    ensure!(sec1_counter.get_displaytext("p")? == "第二部");
    ensure!(sec2_counter.get_displaytext("n")? == "１");
    ensure!(sec3_counter.current("n") == Some(2));

    Ok(())
}

fn test_converter() -> Result<()> {
    log::info!("==== renban converter ====");

    let mut converter = RenbanConverter::new("@")?;
    log::info!("{}", converter);

    ensure!(converter.convert_line("# @n Introduction")? == "# 第１章 Introduction");
    ensure!(converter.convert_line("# @@n Subsection")? == "# １ Subsection");
    ensure!(converter.convert_line("# @@@n 小見出し")? == "#  小見出し");
    ensure!(
        converter.convert_line("# test@test.emailaddress.com 大見出し")?
            == "# test@test.emailaddress.com 大見出し"
    );

    Ok(())
}

pub fn run() -> Result<()> {
    test_patterns()?;
    test_mark_counter()?;
    test_converter()?;
    Ok(())
}
