use qalam_core::ShapeOptions;
use qalam_text::{ShapeCache, basic_arabic_charset, complete_arabic_charset, persian_charset};
use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

struct Config {
    input: Option<PathBuf>,
    options: ShapeOptions,
    charset: Option<&'static str>,
}

fn print_usage() {
    eprintln!(
        "Usage: qalam-fix [--input <file>] [--no-tashkeel] [--eastern-digits] [--keep-tags]\n\
         \x20                [--auto-direction] [--charset <complete|basic|persian>]\n\
         \n\
         Shapes each line of the input (stdin by default) for display.\n\
         Options start from QALAM_* environment variables; flags override them.\n\
         \n\
         Example:\n\
           echo 'Hello \u{0645}\u{0631}\u{062D}\u{0628}\u{0627}' | qalam-fix --eastern-digits"
    );
}

fn parse_args(defaults: ShapeOptions) -> Result<Config, String> {
    let mut args = env::args().skip(1);
    let mut config = Config {
        input: None,
        options: defaults,
        charset: None,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--input requires a value".to_string())?;
                config.input = Some(PathBuf::from(value));
            }
            "--no-tashkeel" => config.options.show_tashkeel = false,
            "--eastern-digits" => config.options.preserve_numbers = false,
            "--keep-tags" => config.options.fix_tags = false,
            "--auto-direction" => config.options.force_rtl = false,
            "--charset" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--charset requires a value".to_string())?;
                config.charset = Some(match value.as_str() {
                    "complete" => complete_arabic_charset(),
                    "basic" => basic_arabic_charset(),
                    "persian" => persian_charset(),
                    other => return Err(format!("unknown charset '{other}'")),
                });
            }
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("unexpected argument '{other}'")),
        }
    }

    Ok(config)
}

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(config: Config) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(charset) = config.charset {
        out.write_all(charset.as_bytes())?;
        return Ok(());
    }

    tracing::debug!(options = %config.options.to_json(), "shaping input");

    let input = read_input(config.input.as_ref())?;
    let mut cache = ShapeCache::with_default_capacity();
    for line in input.lines() {
        writeln!(out, "{}", cache.get_or_shape(line, &config.options))?;
    }

    let stats = cache.stats();
    tracing::debug!(hits = stats.hits, misses = stats.misses, "done");
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = qalam_core::logging::init() {
        eprintln!("qalam-fix: logging disabled: {err}");
    }

    let config = match parse_args(ShapeOptions::from_env()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("qalam-fix: {err}");
            print_usage();
            return ExitCode::from(2);
        }
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("qalam-fix: {err}");
            ExitCode::FAILURE
        }
    }
}
