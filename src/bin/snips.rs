use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use devsnips::{decode_token, match_lines, synthesize_interface_named, try_normalize, TOOLS};
use is_terminal::IsTerminal;

/// Tiny text tools for everyday dev work.
///
/// snips bundles three small utilities: a JSON formatter with TypeScript
/// interface generation, a regular-expression line tester, and a JWT decoder.
/// Everything runs locally on the text you give it; nothing is stored or
/// sent anywhere.
#[derive(Parser, Debug)]
#[command(name = "snips")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Format JSON, or generate a TypeScript interface from it.
    Json {
        /// Input file. If not specified, reads from stdin.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output file. If not specified, writes to stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit a TypeScript interface instead of formatted JSON.
        #[arg(long)]
        types: bool,

        /// Interface name to use with --types.
        #[arg(long, default_value = "Data")]
        name: String,
    },

    /// Print the lines of the input that match a regular expression.
    Regex {
        /// Pattern to test each line against.
        pattern: String,

        /// JavaScript-style flags: i, m, s, u, g.
        #[arg(short, long, default_value = "")]
        flags: String,

        /// Input file. If not specified, reads from stdin.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Decode a JWT-style token. The signature is NOT verified.
    Jwt {
        /// The token. If not specified, reads from stdin.
        token: Option<String>,

        /// Emit the decoded parts as a JSON object.
        #[arg(long)]
        json: bool,
    },

    /// List the bundled tools.
    Tools {
        /// Emit the list as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("snips: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        Command::Json { file, output, types, name } => {
            let input = read_input(file.as_ref())?;
            let pretty = try_normalize(&input).map_err(|e| format!("invalid JSON: {}", e))?;

            let result = if types {
                let iface = synthesize_interface_named(&pretty, &name);
                if iface.is_empty() {
                    return Err("top-level value is not an object; no interface to generate".into());
                }
                iface
            } else {
                pretty
            };

            write_output(output.as_ref(), &result)
        }

        Command::Regex { pattern, flags, file } => {
            let text = read_input(file.as_ref())?;
            let lines = match_lines(&pattern, &flags, &text)?;
            let mut stdout = io::stdout();
            for line in &lines {
                writeln!(stdout, "{}", line)?;
            }
            Ok(())
        }

        Command::Jwt { token, json } => {
            let token = match token {
                Some(t) => t,
                None => read_input(None)?.trim().to_string(),
            };
            let decoded = decode_token(&token)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&decoded)?);
            } else {
                println!("Header\n{}\n", decoded.header);
                println!("Payload\n{}\n", decoded.payload);
                println!("Signature (raw, not verified)\n{}", decoded.signature);
            }
            Ok(())
        }

        Command::Tools { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&TOOLS)?);
            } else {
                for tool in &TOOLS {
                    println!("{:<7} {:<12} {}", tool.name, tool.title, tool.description);
                }
            }
            Ok(())
        }
    }
}

fn read_input(file: Option<&PathBuf>) -> Result<String, Box<dyn std::error::Error>> {
    match file {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {}", path.display(), e).into()),
        None => {
            if io::stdin().is_terminal() {
                return Err("no input: pass a FILE or pipe text on stdin".into());
            }
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn write_output(output: Option<&PathBuf>, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, text)
            .map_err(|e| format!("cannot write '{}': {}", path.display(), e).into()),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(text.as_bytes())?;
            if !text.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            Ok(())
        }
    }
}
