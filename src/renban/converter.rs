use std::fmt;

use regex::Regex;

use crate::{
    error::RenbanError,
    renban::{
        counter::MarkCounter,
        displayer::{bu_kanji, empty, plain_zenkaku, sho_zenkaku},
        is_valid_renban_mark_name,
        pattern::create_renban_pattern,
        SectionLevel,
    },
};

// [renban mark]
//
// @chapter
// ^^^^^^^^
// 12222222   1:mark   2:name
enum SectionConversion {
    NoMatch,
    // マッチしたが n / p 以外の名前だった
    Ignored,
    Converted(String),
}

struct SectionRenban {
    level: SectionLevel,
    mark_run: String,
    pattern: Regex,
    counter: MarkCounter,
}

impl SectionRenban {
    fn new(mark: char, level: SectionLevel, counter: MarkCounter) -> Result<Self, RenbanError> {
        Ok(SectionRenban {
            level,
            mark_run: mark.to_string().repeat(level.depth()),
            pattern: create_renban_pattern(mark, level)?,
            counter,
        })
    }

    fn convert(&mut self, line: &str) -> Result<SectionConversion, RenbanError> {
        // 一行に複数の renban mark は無いとみなし，最初のマッチだけ使う
        let Some(caps) = self.pattern.captures(line) else {
            return Ok(SectionConversion::NoMatch);
        };
        let (Some(tag), Some(name)) = (caps.name("tag"), caps.name("name")) else {
            return Ok(SectionConversion::NoMatch);
        };

        let name = name.as_str();
        if !is_valid_renban_mark_name(name) {
            return Ok(SectionConversion::Ignored);
        }

        self.counter.count(name);
        let displaytext = self.counter.get_displaytext(name)?;

        // 最初に現れたものだけ置き換える
        let converted = line.replacen(tag.as_str(), &displaytext, 1);

        log::debug!(
            "LV{} {:?} -> {:?}",
            self.level.depth(),
            tag.as_str(),
            displaytext
        );

        Ok(SectionConversion::Converted(converted))
    }
}

pub struct RenbanConverter {
    mark: char,
    sections: Vec<SectionRenban>,
}

impl RenbanConverter {
    pub fn new(mark: &str) -> Result<Self, RenbanError> {
        let mut chars = mark.chars();
        let mark = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(RenbanError::InvalidMark(mark.to_owned())),
        };

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
        sec3_counter.set_displayer(empty);

        let sections = SectionLevel::ALL
            .into_iter()
            .zip([sec1_counter, sec2_counter, sec3_counter])
            .map(|(level, counter)| SectionRenban::new(mark, level, counter))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RenbanConverter { mark, sections })
    }

    pub fn mark(&self) -> char {
        self.mark
    }

    pub fn counter(&self, level: SectionLevel) -> &MarkCounter {
        &self.sections[level.depth() - 1].counter
    }

    pub fn is_renban_target_line(&self, line: &str) -> bool {
        line.contains(self.mark)
    }

    // 大 -> 中 -> 小 の順に試し，最初にマッチした見出しレベルだけで判断する．
    // そのレベルで名前が無効なら他のレベルは試さずにそのまま返す
    pub fn convert_line(&mut self, line: &str) -> Result<String, RenbanError> {
        for section in self.sections.iter_mut() {
            match section.convert(line)? {
                SectionConversion::NoMatch => continue,
                SectionConversion::Ignored => break,
                SectionConversion::Converted(converted) => return Ok(converted),
            }
        }

        log::trace!("Not converted: {:?}", line);
        Ok(line.to_owned())
    }
}

impl fmt::Display for RenbanConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[RenbanConverter]")?;
        for section in &self.sections {
            write!(
                f,
                "\nLV{} {} => {}",
                section.level.depth(),
                section.mark_run,
                section.pattern.as_str()
            )?;
        }
        Ok(())
    }
}
