use anyhow::{anyhow, Result};

/// One line of playground input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Rgb(f64, f64, f64),
    Hls(f64, f64, f64),
    Cmyk(f64, f64, f64, f64),
    Hex(String),
    Swatch(usize),
    Swatches,
    Show,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command> {
        let mut words = line.split_whitespace();
        let keyword = match words.next() {
            Some(word) => word,
            None => return Ok(Command::Show),
        };
        let args: Vec<&str> = words.collect();
        match keyword {
            "rgb" => {
                let v = numbers(&args, 3)?;
                Ok(Command::Rgb(v[0], v[1], v[2]))
            }
            "hls" => {
                let v = numbers(&args, 3)?;
                Ok(Command::Hls(v[0], v[1], v[2]))
            }
            "cmyk" => {
                let v = numbers(&args, 4)?;
                Ok(Command::Cmyk(v[0], v[1], v[2], v[3]))
            }
            "hex" => match args.as_slice() {
                [hex] => Ok(Command::Hex((*hex).to_string())),
                _ => Err(anyhow!("usage: hex #RRGGBB")),
            },
            "swatch" => match args.as_slice() {
                [raw] => raw
                    .parse::<usize>()
                    .map(Command::Swatch)
                    .map_err(|_| anyhow!("usage: swatch <index>")),
                _ => Err(anyhow!("usage: swatch <index>")),
            },
            "swatches" => Ok(Command::Swatches),
            "show" => Ok(Command::Show),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(anyhow!(
                "unknown command {:?}, try rgb/hls/cmyk/hex/swatch/swatches/show/quit",
                other
            )),
        }
    }
}

fn numbers(args: &[&str], expected: usize) -> Result<Vec<f64>> {
    if args.len() != expected {
        return Err(anyhow!("expected {} numbers, got {}", expected, args.len()));
    }
    args.iter()
        .map(|raw| {
            raw.parse::<f64>()
                .map_err(|_| anyhow!("{:?} is not a number", raw))
        })
        .collect()
}
