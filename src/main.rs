//! pytemplate CLI
//!
//! Usage:
//!   pytemplate [OPTIONS] [FILE]
//!
//! Options:
//!   -m, --vars <FILE>         Variable file ([vars] table, TOML format)
//!   -D, --define <KEY=VALUE>  Define a variable (repeatable)
//!   -e, --env                 Fall back to environment variables
//!       --env-prefix <PREFIX> Only consult variables named PREFIX + name
//!   -s, --safe                Leave unresolved placeholders intact
//!   -c, --check               Only validate the template
//!   -i, --identifiers         Print the template's variable names
//!   -d, --debug               Debug logging on stderr
//!   -h, --help                Print help

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pytemplate::{EnvResolver, ResolutionConfig, Template, VariableFile};

#[derive(Parser)]
#[command(name = "pytemplate")]
#[command(about = "Substitute $name and ${name} placeholders in text")]
struct Cli {
    /// Template file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Variable file with a [vars] table (TOML format)
    #[arg(short = 'm', long = "vars")]
    vars: Option<PathBuf>,

    /// Define a variable; overrides the variable file
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE", value_parser = parse_define)]
    define: Vec<(String, String)>,

    /// Fall back to environment variables for names not otherwise defined
    #[arg(short, long)]
    env: bool,

    /// Only consult environment variables named PREFIX + name
    #[arg(long, value_name = "PREFIX", requires = "env")]
    env_prefix: Option<String>,

    /// Leave unresolved placeholders in the output instead of failing
    #[arg(short, long)]
    safe: bool,

    /// Only check that the template parses
    #[arg(short, long)]
    check: bool,

    /// Print the template's variable names, one per line
    #[arg(short, long)]
    identifiers: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    debug: bool,
}

fn parse_define(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    if key.is_empty() || pytemplate::parser::lexer::identifier_len(key) != key.len() {
        return Err(format!("'{}' is not a valid variable name", key));
    }
    Ok((key.to_string(), value.to_string()))
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return ExitCode::SUCCESS;
    }

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    let template = match Template::parse(&source) {
        Ok(template) => template,
        Err(e) => {
            eprint!("{}", e.format(&source, &filename, io::stderr().is_terminal()));
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(segments = template.len(), file = %filename, "template parsed");

    if cli.check {
        return ExitCode::SUCCESS;
    }

    if cli.identifiers {
        for name in template.identifiers() {
            println!("{}", name);
        }
        return ExitCode::SUCCESS;
    }

    // Load variables
    let mut variables = match &cli.vars {
        Some(path) => match VariableFile::from_file(path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Error loading variables '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => VariableFile::default(),
    };
    for (key, value) in &cli.define {
        variables.insert(key.as_str(), value.as_str());
    }

    let env = match &cli.env_prefix {
        Some(prefix) => EnvResolver::with_prefix(prefix.as_str()),
        None => EnvResolver::new(),
    };

    let mut config = ResolutionConfig::new()
        .with_mapping(variables.vars())
        .with_safe(cli.safe);
    if cli.env {
        config = config.with_fallback(&env);
    }

    match template.render(&config) {
        Ok(text) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
                eprintln!("Error writing output: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_intro() {
    println!(
        r#"pytemplate - substitute $name and ${{name}} placeholders in text

USAGE:
    pytemplate [OPTIONS] [FILE]
    echo '<template>' | pytemplate [OPTIONS]

OPTIONS:
    -m, --vars <FILE>      Variable file ([vars] table, TOML)
    -D, --define K=V       Define a variable (repeatable)
    -e, --env              Fall back to environment variables
    --env-prefix <P>       Only consult environment variables named P + name
    -s, --safe             Leave unresolved placeholders intact
    -c, --check            Only validate the template
    -i, --identifiers      Print variable names, one per line
    -d, --debug            Debug logging on stderr
    -h, --help             Print help

SYNTAX:
    $name       Bare placeholder, name is [A-Za-z_][A-Za-z0-9_]*
    ${{name}}     Braced placeholder, for names followed by identifier characters
    $$          A literal dollar sign

QUICK START:
    echo 'Hello, $USER!' | pytemplate --env"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_define() {
        assert_eq!(
            parse_define("friend=World=Earth"),
            Ok(("friend".to_string(), "World=Earth".to_string()))
        );
        assert_eq!(parse_define("empty="), Ok(("empty".to_string(), String::new())));
        assert!(parse_define("no_equals").is_err());
        assert!(parse_define("1bad=x").is_err());
        assert!(parse_define("=x").is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
