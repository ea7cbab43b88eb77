use crate::error::RenbanError;

// (name, count) を受け取って表示用文字列を返す．対象外の name なら None
pub type Displayer = fn(&str, usize) -> Option<String>;

// 登録順に試して最初に Some を返したものを使う
#[derive(Default, Clone)]
pub struct DisplayerRegistry {
    displayers: Vec<Displayer>,
}

impl DisplayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, displayer: Displayer) -> &mut Self {
        self.displayers.push(displayer);
        self
    }

    pub fn display(&self, name: &str, count: usize) -> Result<String, RenbanError> {
        self.displayers
            .iter()
            .find_map(|displayer| displayer(name, count))
            .ok_or_else(|| RenbanError::NoDisplayer {
                name: name.to_owned(),
            })
    }
}

const ZENKAKU_DIGITS: [char; 10] = ['０', '１', '２', '３', '４', '５', '６', '７', '８', '９'];

// 0 は対応する文字が無いのでそのまま (十部という大作はさすがに無いと思う)
const KANJI_DIGITS: [Option<char>; 10] = [
    None,
    Some('一'),
    Some('二'),
    Some('三'),
    Some('四'),
    Some('五'),
    Some('六'),
    Some('七'),
    Some('八'),
    Some('九'),
];

// 桁ごとに置き換えるだけ (12 -> "１２")
pub fn to_zenkaku_digits(count: usize) -> String {
    count
        .to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => ZENKAKU_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

// 位取りはしない (12 -> "一二")
pub fn to_kanji_digits(count: usize) -> String {
    count
        .to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => KANJI_DIGITS[d as usize].unwrap_or(c),
            None => c,
        })
        .collect()
}

// 第１章
pub fn sho_zenkaku(name: &str, count: usize) -> Option<String> {
    if name != "n" {
        return None;
    }
    Some(format!("第{}章", to_zenkaku_digits(count)))
}

// 第一部
pub fn bu_kanji(name: &str, count: usize) -> Option<String> {
    if name != "p" {
        return None;
    }
    Some(format!("第{}部", to_kanji_digits(count)))
}

// １
pub fn plain_zenkaku(name: &str, count: usize) -> Option<String> {
    if name != "n" {
        return None;
    }
    Some(to_zenkaku_digits(count))
}

pub fn empty(_name: &str, _count: usize) -> Option<String> {
    Some(String::new())
}
