mod report;

use chrono::{Local, NaiveDate};
use chrono_english::{Dialect, parse_date_string};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;
use zahlwort::{
    ConversionError, Currency, CurrencyFlags, DEFAULT_DATE_PATTERN, DEFAULT_LANGUAGE, DEFAULT_SEPARATOR, Options,
    Target, cardinal_verbose, convert, to_date_with,
};

const LOG_ENV: &str = "ZAHLWORT_LOG";

fn main() {
    init_logging();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();
}

fn run(config: &CliConfig) -> Result<(), ConversionError> {
    let input = config.input.trim();

    if config.trace {
        let value = input.parse::<num_bigint::BigInt>().map_err(|_| ConversionError::NotANumber(input.to_string()))?;
        let verbose = cardinal_verbose(value)?;
        report::print_trace(input, &verbose, config.color);
        return Ok(());
    }

    let text = match config.options.to {
        Target::Date if NaiveDate::parse_from_str(input, "%Y-%m-%d").is_err() => {
            let date = parse_date_string(input, Local::now(), Dialect::Uk)
                .map_err(|_| ConversionError::NotADate(input.to_string()))?;
            tracing::debug!(input, resolved = %date.date_naive(), "relative date");
            to_date_with(&date, &config.options.lang, &config.options.date_pattern)?
        }
        _ => convert(input, &config.options)?,
    };
    println!("{text}");
    Ok(())
}

struct CliConfig {
    input: String,
    options: Options,
    trace: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut options = Options::default();
    let mut trace = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("zahlwort {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--trace" => trace = true,
            "--terse-cents" => options.currency_flags.remove(CurrencyFlags::VERBOSE_CENTS),
            "--adjective" => options.currency_flags.insert(CurrencyFlags::ADJECTIVE),
            "--short" => options.longform = false,
            "--to" | "--currency" | "--separator" | "--pattern" | "--lang" => {
                let value = args.next().ok_or_else(|| format!("error: {arg} expects a value"))?;
                apply_value(&mut options, &arg, &value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--") && arg.contains('=') => {
                let (flag, value) = arg.split_once('=').unwrap_or((arg.as_str(), ""));
                apply_value(&mut options, flag, value)?;
            }
            // Negative numbers are input, not options.
            _ if arg.starts_with('-') && !arg[1..].starts_with(|c: char| c.is_ascii_digit()) => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, options, trace, color })
}

fn apply_value(options: &mut Options, flag: &str, value: &str) -> Result<(), String> {
    match flag {
        "--to" => options.to = value.parse::<Target>().map_err(|err| format!("error: {err}"))?,
        "--currency" => options.currency = value.parse::<Currency>().map_err(|err| format!("error: {err}"))?,
        "--separator" => options.separator = value.to_string(),
        "--pattern" => options.date_pattern = value.to_string(),
        "--lang" => options.lang = value.to_string(),
        _ => return Err(format!("error: unknown option '{flag}'")),
    }
    Ok(())
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "zahlwort {version}

German numbers, ordinals, years, amounts and dates in words.

Usage:
  zahlwort [OPTIONS] [--] <input...>

Options:
  --to <target>              cardinal, ordinal, ordinal_num, year, currency, date.
                             Default: cardinal
  --currency <code>          EUR, GBP, USD, CNY, DEM. Default: EUR
  --terse-cents              Write cents as two digits.
  --adjective                Prefix the unit with its adjective (US Dollar).
  --separator <text>         Text between unit and cents. Default: \"{separator}\"
  --short                    Years without \"hundert\" (neunzehnvierundachtzig).
  --pattern <pattern>        Date pattern using %d, %B and %Y. Default: \"{pattern}\"
  --lang <code>              Month name language. Default: {lang}
  --trace                    Show the merge steps of a cardinal.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Dates are read as YYYY-MM-DD or as English expressions like \"next friday\".
Set {log_env}=debug to log conversions to stderr.

Exit codes:
  0  Success.
  1  Conversion error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        separator = DEFAULT_SEPARATOR,
        pattern = DEFAULT_DATE_PATTERN,
        lang = DEFAULT_LANGUAGE,
        log_env = LOG_ENV,
    )
}
