use std::{fs, path::Path};

use anyhow::{bail, Context, Result};

use crate::{error::RenbanError, renban::converter::RenbanConverter};

// 行の順番・行数はそのまま．前の行までの番号を引き継ぐので必ず先頭から順に処理する
pub fn renumber_lines<'a, I>(
    converter: &mut RenbanConverter,
    lines: I,
) -> Result<Vec<String>, RenbanError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut outlines = Vec::new();
    for line in lines {
        let newline = if converter.is_renban_target_line(line) {
            converter.convert_line(line)?
        } else {
            line.to_owned()
        };
        outlines.push(newline);
    }
    Ok(outlines)
}

// 呼ぶたびに番号は 1 から数え直す
pub fn get_renbaned_lines<S: AsRef<str>>(
    lines: &[S],
    mark: &str,
) -> Result<Vec<String>, RenbanError> {
    let mut converter = RenbanConverter::new(mark)?;
    renumber_lines(&mut converter, lines.iter().map(|line| line.as_ref()))
}

pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let (txt, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(&bytes);
    if had_errors {
        bail!("Invalid UTF-8: {}", path.display());
    }

    Ok(txt.lines().map(|line| line.to_owned()).collect())
}

pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let mut txt = String::new();
    for line in lines {
        txt.push_str(line.as_ref());
        txt.push('\n');
    }

    fs::write(path, txt).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
