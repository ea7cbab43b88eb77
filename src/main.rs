use anyhow::{bail, ensure, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::{env, path::PathBuf, process};

use renban::{
    document::{read_lines, renumber_lines, write_lines},
    renban::converter::RenbanConverter,
    self_test,
};

struct Args {
    input_path: Option<String>,
    output_path: Option<String>,
    mark: String,
    test: bool,
    progress: bool,
    help: bool,
}

fn create_options() -> getopts::Options {
    let mut opts = getopts::Options::new();
    opts.optopt("i", "input", "An input filename.", "PATH");
    opts.optopt("o", "output", "An output filename.", "PATH");
    opts.optopt("m", "mark", "A renban mark character. (default: @)", "CHAR");
    opts.optflag("", "test", "[DEBUG] Do unittest.");
    opts.optflag("", "progress", "Show a progress bar.");
    opts.optflag("h", "help", "Print this help.");
    opts
}

fn get_args(opts: &getopts::Options) -> Result<Args> {
    let args: Vec<String> = env::args().skip(1).collect();

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    Ok(Args {
        input_path: matches.opt_str("input"),
        output_path: matches.opt_str("output"),
        mark: matches.opt_str("mark").unwrap_or_else(|| "@".to_owned()),
        test: matches.opt_present("test"),
        progress: matches.opt_present("progress"),
        help: matches.opt_present("help"),
    })
}

fn run(args: Args) -> Result<()> {
    let input_path = args
        .input_path
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("An input filepath required!"))?;
    let output_path = args
        .output_path
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("An output filepath required!"))?;

    ensure!(
        input_path.exists(),
        "The input file \"{}\" does not exists.",
        input_path.display()
    );

    // 何か読み書きする前にマークを検査する
    let mut converter = RenbanConverter::new(&args.mark)?;
    log::debug!("{}", converter);

    log::info!("Processing {}...", input_path.display());

    let lines = read_lines(&input_path)?;

    let renbaned_lines = if args.progress {
        let pb = create_progress_bar(lines.len() as u64);
        renumber_lines(
            &mut converter,
            lines.iter().map(|line| line.as_str()).progress_with(pb),
        )?
    } else {
        renumber_lines(&mut converter, lines.iter().map(|line| line.as_str()))?
    };

    write_lines(&output_path, &renbaned_lines)?;

    log::info!("Finished: {}", output_path.display());

    Ok(())
}

fn main() {
    env_logger::init();

    let opts = create_options();

    let args = match get_args(&opts) {
        Ok(args) => args,
        Err(e) => abort(e),
    };

    if args.help {
        print!("{}", opts.usage("Usage: renban -i INPUT -o OUTPUT [options]"));
        return;
    }

    if args.test {
        if let Err(e) = self_test::run() {
            println!("{:?}", e);
            process::exit(1);
        }
        println!("OK. All test passed!");
        return;
    }

    if let Err(e) = run(args) {
        abort(e);
    }
}

fn abort(e: anyhow::Error) -> ! {
    println!("Error!: {:#}", e);
    process::exit(1);
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
