use std::io;
use std::io::{BufRead, Write};

use anyhow::Result;
use colorspace::hex_to_rgb;
use picker_state::{PickerState, PRESET_SWATCHES};

mod commands;
use commands::Command;

const PROMPT: &'static str = "> ";

fn main() -> Result<()> {
    let mut state = PickerState::new();
    banner();
    render(&state);
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => {
                apply(&mut state, command);
                render(&state);
            }
            Err(err) => println!("error: {}", err),
        }
        prompt()?;
    }
    Ok(())
}

fn apply(state: &mut PickerState, command: Command) {
    match command {
        Command::Rgb(r, g, b) => state.update_all_from_rgb(r, g, b),
        Command::Hls(h, l, s) => state.update_all_from_hls(h, l, s),
        Command::Cmyk(c, m, y, k) => state.update_all_from_cmyk(c, m, y, k),
        Command::Hex(hex) => state.update_all_from_hex(&hex),
        Command::Swatch(index) => {
            if let Err(err) = state.select_swatch(index) {
                println!("error: {}", err);
            }
        }
        Command::Swatches => swatch_strip(),
        Command::Show | Command::Quit => {}
    }
}

/// Repaints every field from the panel. Nothing here keeps state of its
/// own; whatever the controller says is what gets drawn.
fn render(state: &PickerState) {
    let panel = state.panel();
    let preview = state.preview();
    println!();
    println!(
        "  \x1b[48;2;{};{};{}m      \x1b[0m  {}  {}",
        preview.red, preview.green, preview.blue, panel.hex, preview
    );
    println!(
        "  rgb  {:>6} {:>6} {:>6}",
        panel.rgb.red, panel.rgb.green, panel.rgb.blue
    );
    println!(
        "  hls  {:>6.1} {:>6.1} {:>6.1}",
        panel.hls.h(),
        panel.hls.l(),
        panel.hls.s()
    );
    println!(
        "  cmyk {:>6.1} {:>6.1} {:>6.1} {:>6.1}",
        panel.cmyk.c(),
        panel.cmyk.m(),
        panel.cmyk.y(),
        panel.cmyk.k()
    );
    if state.warning() {
        println!("  (!) value out of range, clamped");
    }
    println!();
}

fn swatch_strip() {
    println!();
    for (index, hex) in PRESET_SWATCHES.iter().enumerate() {
        if let Ok(rgb) = hex_to_rgb(hex) {
            println!(
                "  {:>2}  \x1b[48;2;{};{};{}m    \x1b[0m  {}",
                index, rgb.red, rgb.green, rgb.blue, hex
            );
        }
    }
    println!();
}

fn banner() {
    println!("picker playground");
    println!("  rgb R G B          channels 0..255");
    println!("  hls H L S          hue 0..360, rest 0..100");
    println!("  cmyk C M Y K       inks 0..100");
    println!("  hex #RRGGBB        also accepts RRGGBB");
    println!("  swatch N           apply preset 0..{}", PRESET_SWATCHES.len() - 1);
    println!("  swatches           list the presets");
    println!("  show, quit");
}

fn prompt() -> Result<()> {
    print!("{}", PROMPT);
    io::stdout().flush()?;
    Ok(())
}
