//! Typed operator prompts for the reconciliation flow.
//!
//! Every prompt validates its input and re-prompts on bad answers; invalid
//! operator input never aborts the run.

use crate::console::Console;
use crate::pricing;
use anyhow::Result;

/// What to do after the report has been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Interactive,
    Force,
    Exit,
}

/// Three-way answer to a y/n question. `Invalid` triggers a re-prompt
/// instead of leaving the confirmation loop dangling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
    Invalid,
}

/// Classifies a y/n answer.
pub fn classify_confirmation(input: &str) -> Confirmation {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Confirmation::Confirmed,
        "n" | "no" => Confirmation::Declined,
        _ => Confirmation::Invalid,
    }
}

/// Asks for the price margin percentage. Blank accepts the default; invalid
/// or out-of-range values re-prompt indefinitely.
pub fn prompt_margin(console: &mut impl Console, default: f64) -> Result<f64> {
    loop {
        let input =
            console.prompt(&format!("Change price margin? (default: {}%): ", default))?;

        match pricing::parse_margin(&input, default) {
            Ok(margin) => return Ok(margin),
            Err(e) => console.say(&e.to_string()),
        }
    }
}

/// Asks which update mode to run; unrecognized input re-prompts.
pub fn prompt_mode(console: &mut impl Console) -> Result<RunMode> {
    loop {
        let input = console.prompt("Run in (I)nteractive, (F)orce, or (E)xit: ")?;

        match input.trim().to_lowercase().as_str() {
            "i" | "interactive" => return Ok(RunMode::Interactive),
            "f" | "force" => return Ok(RunMode::Force),
            "e" | "exit" => return Ok(RunMode::Exit),
            _ => console.say("Please answer I, F, or E."),
        }
    }
}

/// Asks for a new price. Blank accepts the suggestion; anything else must
/// parse as a positive number or the prompt repeats.
pub fn prompt_new_price(console: &mut impl Console, suggested: f64) -> Result<f64> {
    loop {
        let input = console
            .prompt(&format!("Suggested price: ${:.2}\nEnter new price: ", suggested))?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(suggested);
        }

        match input.parse::<f64>() {
            Ok(price) if price > 0.0 => return Ok(price),
            _ => console.say("Invalid input. Please enter a valid price."),
        }
    }
}

/// Asks a y/n question, re-prompting until the answer is explicit.
pub fn prompt_yes_no(console: &mut impl Console, message: &str) -> Result<bool> {
    loop {
        let input = console.prompt(message)?;
        match classify_confirmation(&input) {
            Confirmation::Confirmed => return Ok(true),
            Confirmation::Declined => return Ok(false),
            Confirmation::Invalid => console.say("Please answer y or n."),
        }
    }
}

/// Force-mode gate: only a literal "yes" proceeds, anything else declines.
pub fn prompt_force_gate(console: &mut impl Console, margin: f64) -> Result<bool> {
    let input = console.prompt(&format!(
        "Are you sure you want to force update ALL prices to +{}%? (yes/no): ",
        margin
    ))?;

    Ok(input.trim().eq_ignore_ascii_case("yes"))
}
