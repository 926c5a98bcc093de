mod callbacks;

use array_generics::*;
use std::path::{Path, PathBuf};

#[derive(clap::Parser)]
#[command(name = "array-generics", version, about = "Run ES5 Array generics over JSON array-likes")]
struct Cli {
    /// Call through the static form, `Array.<method>(receiver, ...)`
    #[arg(short = 's', long = "static")]
    static_form: bool,

    /// Read the receiver from a JSON file instead of the command line
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Method to run (indexOf, slice, map, ...). Starts a REPL when omitted.
    method: Option<String>,

    /// Receiver followed by the method arguments: JSON values, `undefined`,
    /// `NaN`, `Infinity`, `-Infinity`, or `@Callback`
    #[arg(allow_hyphen_values = true)]
    operands: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger (controlled by RUST_LOG)
    env_logger::init();

    let cli = <Cli as clap::Parser>::parse();

    let env = new_js_object_data();
    let report = initialize_array_module(&env)?;
    log::debug!("installed {} capabilities, kept {}", report.installed.len(), report.skipped.len());

    let Some(method) = cli.method else {
        run_persistent_repl(&env)?;
        return Ok(());
    };

    let result = collect_operands(cli.file.as_deref(), cli.operands)
        .and_then(|operands| run_command(&env, &method, &operands, cli.static_form));
    match result {
        Ok(result) => println!("{}", format_value(&result)),
        Err(err) => {
            eprintln!("{}", err.user_message());
            std::process::exit(1);
        }
    }
    Ok(())
}

/// The receiver read from `file` (if any) followed by the command-line
/// operands.
fn collect_operands(file: Option<&Path>, rest: Vec<String>) -> Result<Vec<String>, JSError> {
    let mut operands = Vec::new();
    if let Some(file) = file {
        log::debug!("reading receiver from {}", file.display());
        operands.push(std::fs::read_to_string(file)?);
    }
    operands.extend(rest);
    Ok(operands)
}

/// Run one method call. `isArray` only exists in static form; every other
/// method goes through `Array.prototype.<method>.call(receiver, ...)` unless
/// `static_form` is set.
fn run_command(env: &JSObjectPtr, method: &str, operands: &[String], static_form: bool) -> Result<Value, JSError> {
    let values = operands.iter().map(|text| parse_operand(text, env)).collect::<Result<Vec<_>, _>>()?;
    log::trace!("run_command: {method} with {} operands", values.len());

    if static_form || method == "isArray" {
        call_array_static(env, method, &values)
    } else {
        let receiver = get_argument(&values, 0);
        call_array_method(env, &receiver, method, values.get(1..).unwrap_or_default())
    }
}

fn parse_operand(text: &str, env: &JSObjectPtr) -> Result<Value, JSError> {
    let text = text.trim();
    match text {
        "undefined" => Ok(Value::Undefined),
        "NaN" => Ok(Value::Number(f64::NAN)),
        "Infinity" | "+Infinity" => Ok(Value::Number(f64::INFINITY)),
        "-Infinity" => Ok(Value::Number(f64::NEG_INFINITY)),
        _ => match text.strip_prefix('@') {
            Some(name) => callbacks::builtin_callback(name).ok_or_else(|| callbacks::unknown_callback(name)),
            None => parse_json_value(text, env),
        },
    }
}

// Persistent rustyline-powered REPL loop extracted into a helper to keep `main()` small.
fn run_persistent_repl(env: &JSObjectPtr) -> Result<(), Box<dyn std::error::Error>> {
    use rustyline::Editor;
    use rustyline::error::ReadlineError;

    let ver = clap::crate_version!();
    println!("array-generics REPL v{ver}. Enter `method receiver [args...]`; 'exit' or Ctrl-D to quit.");

    let mut rl = Editor::<(), rustyline::history::FileHistory>::new()?;

    // Simple history file in the user's home directory
    let history_path: Option<PathBuf> = std::env::var("HOME").ok().map(|h| PathBuf::from(h).join(".array_generics_history"));
    if let Some(ref p) = history_path {
        let _ = rl.load_history(p);
    }

    let mut buffer = String::new();

    loop {
        let prompt = if buffer.is_empty() { "array> " } else { "....   " };

        match rl.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if buffer.is_empty() && (trimmed == "exit" || trimmed == ".exit") {
                    break;
                }

                if buffer.is_empty() {
                    buffer = line;
                } else {
                    buffer.push('\n');
                    buffer.push_str(&line);
                }

                // keep reading while a JSON operand is still open
                if !is_complete_input(&buffer) {
                    continue;
                }

                let mut operands = split_operands(&buffer);
                if operands.is_empty() {
                    buffer.clear();
                    continue;
                }

                rl.add_history_entry(buffer.clone())?;

                let method = operands.remove(0);
                let (static_form, method) = match method.strip_prefix("Array.") {
                    Some(m) => (true, m.to_string()),
                    None => (false, method),
                };
                match run_command(env, &method, &operands, static_form) {
                    Ok(val) => println!("{}", format_value(&val)),
                    Err(e) => eprintln!("{}", e.user_message()),
                }

                buffer.clear();
            }
            Err(ReadlineError::Interrupted) => {
                println!();
                buffer.clear();
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye");
                break;
            }
            Err(err) => {
                eprintln!("Readline error: {err}");
                break;
            }
        }
    }

    if let Some(ref p) = history_path {
        rl.save_history(p)?;
    }
    Ok(())
}
