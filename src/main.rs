use clap::{Arg, Command};
use sortwind::{FALLBACK_LANG, Sortwind, load_settings_from_file};
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    let matches = Command::new("sortwind")
        .version("0.1.0")
        .about("Sorts Tailwind-style class lists embedded in source files")
        .arg(
            Arg::new("file")
                .help("Source file to sort")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a sortwind settings JSON file")
                .required(true),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .short('l')
                .help("Language identifier used to pick the matcher configuration")
                .default_value(FALLBACK_LANG),
        )
        .arg(
            Arg::new("write")
                .long("write")
                .short('w')
                .help("Rewrite the file in place instead of printing to stdout")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("allow-duplicates")
                .long("allow-duplicates")
                .help("Keep duplicate classes instead of dropping them")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let file = matches.get_one::<String>("file").unwrap();
    let config = matches.get_one::<String>("config").unwrap();
    let lang = matches.get_one::<String>("lang").unwrap();
    let write = matches.get_flag("write");
    let allow_duplicates = matches.get_flag("allow-duplicates");

    if let Err(err) = run(file, config, lang, write, allow_duplicates) {
        eprintln!("sortwind: {}", err);
        process::exit(1);
    }
}

fn run(
    file: &str,
    config: &str,
    lang: &str,
    write: bool,
    allow_duplicates: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings_from_file(Path::new(config))?;
    let mut sortwind = Sortwind::from(settings);
    if allow_duplicates {
        sortwind.with_remove_duplicates(false);
    }

    let text = fs::read_to_string(file)?;
    let sorted = sortwind.sort_text(lang, &text)?;

    if write {
        if sorted != text {
            fs::write(file, &sorted)?;
        }
    } else {
        print!("{}", sorted);
    }

    Ok(())
}
