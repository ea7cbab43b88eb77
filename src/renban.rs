// 連番マーク (@n, @@n, @@@n, @p ...) を見出し用の連番表記に置き換える
//
// マークの繰り返し回数が見出しの深さを表す：
// - @n   大見出し (第１章)
// - @@n  中見出し (１)
// - @@@n 小見出し (消える)
// 大見出しが数えられると中見出し以降が，中見出しが数えられると小見出しがリセットされる

pub mod converter;
pub mod counter;
pub mod displayer;
pub mod pattern;

// 一行に書ける名前はこれだけ．他の名前は稀だろうから無視する
pub const VALID_RENBAN_MARK_NAMES: [&str; 2] = ["n", "p"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionLevel {
    Oh,   // 大見出し
    Naka, // 中見出し
    Ko,   // 小見出し
}

impl SectionLevel {
    // 変換を試す順番
    pub const ALL: [SectionLevel; 3] = [Self::Oh, Self::Naka, Self::Ko];

    pub fn depth(&self) -> usize {
        match self {
            Self::Oh => 1,
            Self::Naka => 2,
            Self::Ko => 3,
        }
    }
}

pub fn is_valid_renban_mark_name(name: &str) -> bool {
    VALID_RENBAN_MARK_NAMES.contains(&name)
}
