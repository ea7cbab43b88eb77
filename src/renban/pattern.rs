use regex::Regex;

use crate::{error::RenbanError, renban::SectionLevel};

// [^@](?P<tag>@{1}(?P<name>[0-9a-zA-Z_]+))
//   |         |  |
//   mark      |  section depth
//             mark
//
// 先頭の [^@] は @@n が "@ + @n" として大見出しにマッチしないためのガード．
// ガードは tag に含まれないので置換されずに残る．
// メールアドレス (test@example.com) も大見出しにマッチしてしまうが，名前が n / p でなければ無視される
pub fn renban_pattern_source(mark: char, level: SectionLevel) -> String {
    let mark = regex::escape(&mark.to_string());

    let mut ret = String::new();
    ret += &format!("[^{}]", mark);
    ret += "(?P<tag>";
    ret += &mark;
    ret += &format!("{{{}}}", level.depth());
    ret += "(?P<name>[0-9a-zA-Z_]+)";
    ret += ")";
    ret
}

pub fn create_renban_pattern(mark: char, level: SectionLevel) -> Result<Regex, RenbanError> {
    Ok(Regex::new(&renban_pattern_source(mark, level))?)
}
