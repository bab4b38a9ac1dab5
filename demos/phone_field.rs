//!
//! Feeds some keystrokes and pastes through a card and a phone field
//! and prints what the widget would show.
//!
//! Run with `cargo run --example phone_field`. The engine logs to `phone_field.log`.
//!

use anyhow::Error;
use rat_numbermask::mask_io::from_ini_str;
use rat_numbermask::{MaskOutcome, MaskedInputState, NumberMaskField};
use std::fs;
use std::path::PathBuf;

const FIELDS: &str = "
[card]
kind=card
template=XXXX XXXX XXXX XXXX

[phone]
kind=phone
template=(XXX) XXX-XX-XX
country_code=7
trunk_prefix=8
";

enum Input {
    Type(&'static str),
    Paste(&'static str),
    Backspace(usize),
    Cursor(u32),
    Return,
}

fn main() -> Result<(), Error> {
    setup_logging()?;

    let mut card = MaskedInputState::new(NumberMaskField::new(from_ini_str(FIELDS, "card")?)?);
    run(
        "card",
        &mut card,
        &[
            Input::Type("4111"),
            Input::Type("1111"),
            Input::Cursor(2),
            Input::Type("5"),
            Input::Backspace(1),
            Input::Paste("1111 1111"),
            Input::Type("2"),
        ],
    )?;

    let mut phone = MaskedInputState::new(NumberMaskField::new(from_ini_str(FIELDS, "phone")?)?);
    run(
        "phone",
        &mut phone,
        &[
            Input::Type("999"),
            Input::Cursor(1),
            Input::Backspace(1),
            Input::Cursor(8),
            Input::Type("1234567"),
            Input::Return,
            Input::Paste("8 (912) 345-67-89"),
            Input::Return,
            Input::Paste("+1 555 123 45 67"),
        ],
    )?;

    phone.set_bracketed(true)?;
    println!("phone: bracketed {:?}", phone.text());
    run("phone", &mut phone, &[Input::Paste("+7 999 123 45 67")])?;

    Ok(())
}

fn run(name: &str, state: &mut MaskedInputState, input: &[Input]) -> Result<(), Error> {
    for i in input {
        if !state.is_focused() {
            state.focus();
        }
        let outcome = match i {
            Input::Type(s) => {
                let mut outcome = MaskOutcome::Accepted;
                for c in s.chars() {
                    outcome = state.insert_char(c)?;
                }
                outcome
            }
            Input::Paste(s) => state.insert_str(s)?,
            Input::Backspace(n) => {
                let mut outcome = MaskOutcome::Accepted;
                for _ in 0..*n {
                    outcome = state.delete_prev_char()?;
                }
                outcome
            }
            Input::Cursor(c) => {
                state.set_cursor(*c);
                MaskOutcome::Accepted
            }
            Input::Return => state.press_return(),
        };
        println!(
            "{}: {:<10} {:<22} @{:>2} {}",
            name,
            format!("{:?}", outcome),
            format!("{:?}", state.text()),
            state.cursor(),
            if state.is_complete() { "complete" } else { "" }
        );
    }
    Ok(())
}

fn setup_logging() -> Result<(), Error> {
    let log = PathBuf::from("phone_field.log");
    if log.exists() {
        fs::remove_file(&log)?;
    }
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(log::LevelFilter::Trace)
        .chain(fern::log_file(&log)?)
        .apply()?;
    Ok(())
}
