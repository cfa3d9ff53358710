//! OmniCore CLI entry point.

use std::env;
use std::io::{self, BufRead};
use std::process::ExitCode;

use omnicore_language::{Analysis, InterpretConfig, analyze, generate};
use omnicore_runtime::Repl;
use omnicore_runtime::dump::{format_document, format_tokens, to_json};

/// CLI configuration parsed from arguments.
#[derive(Default)]
#[allow(clippy::struct_excessive_bools)]
struct CliConfig {
    text: Vec<String>,
    show_help: bool,
    show_version: bool,
    strict: bool,
    visual: bool,
    max_depth: Option<usize>,
    dump_tokens: bool,
    dump_ast: bool,
    json: bool,
    interactive: bool,
}

impl CliConfig {
    fn interpret_config(&self) -> InterpretConfig {
        let mut config = InterpretConfig::default()
            .with_strict(self.strict)
            .with_visual_modifiers(self.visual);
        if let Some(depth) = self.max_depth {
            config = config.with_max_depth(depth);
        }
        config
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-s" | "--strict" => config.strict = true,
            "-i" | "--interactive" => config.interactive = true,
            "--visual" => config.visual = true,
            "--tokens" => config.dump_tokens = true,
            "--ast" => config.dump_ast = true,
            "--json" => config.json = true,
            "--max-depth" => {
                i += 1;
                if i >= args.len() {
                    return Err("--max-depth requires a value".into());
                }
                config.max_depth = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --max-depth value: {}", args[i]))?,
                );
            }
            "--" => {
                config.text.extend(args[i + 1..].iter().cloned());
                break;
            }
            arg if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("unknown option: {arg}").into());
            }
            text => config.text.push(text.to_string()),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("omnicore {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = cli.interpret_config();

    if cli.interactive {
        let mut repl = Repl::new()?.with_config(config);
        repl.run()?;
        return Ok(());
    }

    if !cli.text.is_empty() {
        return translate(&cli.text.join(" "), &cli, &config);
    }

    log::debug!("no text given, reading stdin");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        translate(&line, &cli, &config)?;
    }
    Ok(())
}

/// Translates one input and prints it, with any requested dumps first.
fn translate(
    text: &str,
    cli: &CliConfig,
    config: &InterpretConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let Analysis { tokens, document } = analyze(text, config)?;

    if cli.dump_tokens {
        if cli.json {
            println!("{}", to_json(&tokens)?);
        } else {
            print!("{}", format_tokens(&tokens));
        }
    }

    if cli.dump_ast {
        if cli.json {
            println!("{}", to_json(&document)?);
        } else {
            println!("{}", format_document(&document));
        }
    }

    println!("{}", generate(&document));
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mOmniCore\x1b[0m - Translate OmniCore notation into English

\x1b[1mUSAGE:\x1b[0m
    omnicore [OPTIONS] [TEXT...]

\x1b[1mARGUMENTS:\x1b[0m
    [TEXT...]    Notation to translate; read from stdin, one input per line, if omitted

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -s, --strict         Report malformed input instead of skipping it
    -i, --interactive    Start the interactive REPL
    --visual             Recognise visual codes such as sky.bright
    --max-depth N        Limit nested statements (default 64)

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --tokens             Print the token stream before the translation
    --ast                Print the statement tree before the translation
    --json               Print --tokens and --ast output as JSON

\x1b[1mEXAMPLES:\x1b[0m
    omnicore '#usr'                      Regarding user
    omnicore '<pov1>#usr'                From first-person perspective, Regarding user
    omnicore --strict '@a $'             Fails on the stray '$'
    omnicore --ast --json '!cmd(a b)'    Dump the tree as JSON
    omnicore < notes.omni                Translate a file line by line
    omnicore -i                          Start the REPL

Set RUST_LOG=omnicore_language=debug to see skipped input."
    );
}
