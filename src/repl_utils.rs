//! Helpers for the interactive command line.
//!
//! A REPL line has the form `method receiver [arg ...]` where every operand
//! is a JSON value or one of the bare words the CLI understands (`undefined`,
//! `NaN`, `Infinity`, `@Callback`). Operands may span lines; the REPL keeps
//! reading while `is_complete_input` says brackets or a string are still open.

/// Returns true when brackets are balanced and no double-quoted string is left
/// open. Brackets inside strings are ignored. A stray closing bracket counts
/// as complete so the error surfaces when the operand is parsed.
pub fn is_complete_input(src: &str) -> bool {
    let mut bracket_stack: Vec<char> = Vec::new();
    let mut in_double = false;
    let mut escape = false;

    for ch in src.chars() {
        if escape {
            escape = false;
            continue;
        }
        if in_double {
            match ch {
                '\\' => escape = true,
                '"' => in_double = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_double = true,
            '[' => bracket_stack.push(']'),
            '{' => bracket_stack.push('}'),
            ']' | '}' => {
                if bracket_stack.pop() != Some(ch) {
                    return true;
                }
            }
            _ => {}
        }
    }

    !in_double && bracket_stack.is_empty()
}

/// Split a complete input into whitespace-separated operands, keeping each
/// bracketed or quoted JSON value in one piece.
pub fn split_operands(src: &str) -> Vec<String> {
    let mut operands = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut in_double = false;
    let mut escape = false;

    for ch in src.chars() {
        if escape {
            escape = false;
            current.push(ch);
            continue;
        }
        if in_double {
            match ch {
                '\\' => escape = true,
                '"' => in_double = false,
                _ => {}
            }
            current.push(ch);
            continue;
        }
        match ch {
            '"' => in_double = true,
            '[' | '{' => depth += 1,
            ']' | '}' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                if !current.is_empty() {
                    operands.push(std::mem::take(&mut current));
                }
                continue;
            }
            _ => {}
        }
        current.push(ch);
    }
    if !current.is_empty() {
        operands.push(current);
    }
    operands
}
