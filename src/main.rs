//! snipview - colorized rendering of query and shell snippets
//!
//! Highlights Splunk SPL, Elasticsearch ES|QL and fish shell snippets as
//! ANSI terminal output or styled HTML.

mod config;
mod error;
mod language;
mod render;
mod syntax;
mod theme;

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use config::Config;
use error::{Result, SnipviewError};
use language::Language;
use render::RenderOptions;
use syntax::Registry;
use theme::{Theme, ThemeMode};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Parsed command line
#[derive(Default)]
struct CliArgs {
    file: Option<PathBuf>,
    lang: Option<Language>,
    theme: Option<ThemeMode>,
    line_numbers: Option<bool>,
    width: Option<usize>,
    html: bool,
    completions: bool,
    list_languages: bool,
    save_config: bool,
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let mut cli = CliArgs::default();

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--lang" | "-l" => {
                let value = expect_value(iter.next(), arg)?;
                cli.lang = Some(value.parse()?);
            }
            "--theme" | "-t" => {
                let value = expect_value(iter.next(), arg)?;
                cli.theme = Some(value.parse()?);
            }
            "--width" | "-w" => {
                let value = expect_value(iter.next(), arg)?;
                let width = value.parse::<usize>().map_err(|_| {
                    SnipviewError::Usage(format!("invalid width '{}'", value))
                })?;
                cli.width = Some(width);
            }
            "--line-numbers" | "-n" => cli.line_numbers = Some(true),
            "--no-line-numbers" => cli.line_numbers = Some(false),
            "--html" => cli.html = true,
            "--completions" => cli.completions = true,
            "--list-languages" => cli.list_languages = true,
            "--save-config" => cli.save_config = true,
            other if other.starts_with('-') && other != "-" => {
                return Err(SnipviewError::Usage(format!(
                    "unknown option '{}' (see --help)",
                    other
                )));
            }
            _ => {
                if cli.file.is_some() {
                    return Err(SnipviewError::Usage(
                        "only one input file may be given".to_string(),
                    ));
                }
                cli.file = Some(PathBuf::from(arg));
            }
        }
    }

    let registry = Registry::new();

    if cli.list_languages {
        for lang in registry.list() {
            println!("{:<6}{}", lang.id(), lang.name());
        }
        return Ok(());
    }

    let mut config = Config::load();

    if cli.save_config {
        if let Some(theme) = cli.theme {
            config.theme = theme;
        }
        if let Some(line_numbers) = cli.line_numbers {
            config.show_line_numbers = line_numbers;
        }
        config.save()?;
        return Ok(());
    }

    let lang = resolve_language(&cli, &registry)?;

    if cli.completions {
        print_completions(lang);
        return Ok(());
    }

    let mut theme = Theme::for_mode(cli.theme.unwrap_or(config.theme));
    if let Some(path) = &config.theme_file {
        theme.load_overrides(path)?;
    }

    let text = read_input(&cli)?;
    let options = RenderOptions {
        line_numbers: cli.line_numbers.unwrap_or(config.show_line_numbers),
        max_width: cli.width,
        extra_css: None,
    };
    let support = registry.support(lang);

    if cli.html {
        print!("{}", render::html::render(&text, support, &theme, &options));
    } else {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        render::ansi::render(&mut out, &text, support, &theme, &options)?;
        out.flush()?;
    }

    Ok(())
}

fn expect_value<'a>(value: Option<&'a String>, flag: &str) -> Result<&'a str> {
    value
        .map(|s| s.as_str())
        .ok_or_else(|| SnipviewError::Usage(format!("{} requires a value", flag)))
}

fn resolve_language(cli: &CliArgs, registry: &Registry) -> Result<Language> {
    if let Some(lang) = cli.lang {
        return Ok(lang);
    }
    match &cli.file {
        Some(path) if path.as_os_str() != "-" => registry
            .detect(path)
            .ok_or_else(|| SnipviewError::UndetectedLanguage(path.display().to_string())),
        _ => Err(SnipviewError::UndetectedLanguage("stdin".to_string())),
    }
}

fn read_input(cli: &CliArgs) -> Result<String> {
    match &cli.file {
        Some(path) if path.as_os_str() != "-" => Ok(fs::read_to_string(path)?),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn print_completions(lang: Language) {
    for suggestion in syntax::completions(lang) {
        println!(
            "{}\t{}\t{}\t{}",
            suggestion.label,
            suggestion.kind.name(),
            suggestion.insert_text,
            suggestion.detail
        );
    }
}

fn print_usage() {
    println!("snipview {} - query/shell snippet highlighter", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: snipview [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE (or stdin when FILE is omitted or '-') and prints it");
    println!("with syntax highlighting.");
    println!();
    println!("Options:");
    println!("  -l, --lang <LANG>    Language: spl, esql or fish");
    println!("                       (detected from the file extension by default)");
    println!("  -t, --theme <MODE>   Color theme: light, dark or auto");
    println!("  -n, --line-numbers   Show line numbers");
    println!("      --no-line-numbers");
    println!("  -w, --width <COLS>   Truncate lines to a display width");
    println!("      --html           Emit styled HTML instead of ANSI text");
    println!("      --completions    Print the language's completion list and exit");
    println!("      --list-languages List supported languages and exit");
    println!("      --save-config    Write the given theme/line-number flags to");
    println!("                       ~/.snipview.conf as defaults and exit");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("Configuration is read from ~/.snipview.conf (theme, line-numbers,");
    println!("theme-file). Command line flags take precedence.");
}

fn print_version() {
    println!("snipview {}", env!("CARGO_PKG_VERSION"));
}
