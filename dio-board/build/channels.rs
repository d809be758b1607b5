//! dio.toml channel table checks and code generation
//!
//! Shared by `build.rs` and the `channel_table` integration test.

use std::fmt::Write as _;

use dio_core::config::MAX_CHANNELS;
use dio_core::MAX_PIN_COUNT;

/// Width of the text column inside the error box
const BOX_WIDTH: usize = 64;

/// One validated `[channel.<NAME>]` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub name: String,
    pub index: usize,
    pub pin: u8,
}

/// Format error message lines with box drawing
pub fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > BOX_WIDTH {
                let head: String = line.chars().take(BOX_WIDTH - 3).collect();
                format!("{}...", head)
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check a channel name can be emitted as a Rust constant
pub fn is_const_ident(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Validate `[channel.*]` entries and return them ordered by index
///
/// Every problem found is returned, one message per line of the error box.
pub fn validate_channels(config: &toml::Value) -> Result<Vec<Channel>, Vec<String>> {
    let table = match config.get("channel") {
        Some(toml::Value::Table(t)) if !t.is_empty() => t,
        Some(toml::Value::Table(_)) | None => {
            return Err(vec![
                "Missing [channel.*] section - at least one channel is required".into(),
            ])
        }
        Some(_) => {
            return Err(vec![
                "'channel' must be a table of [channel.<NAME>] entries".into(),
            ])
        }
    };

    let mut errors = Vec::new();
    let mut channels = Vec::new();

    for (name, entry) in table {
        let entry = match entry {
            toml::Value::Table(t) => t,
            _ => {
                errors.push(format!("[channel.{}] must be a table", name));
                continue;
            }
        };

        if !is_const_ident(name) {
            errors.push(format!(
                "[channel.{}] name must be UPPER_SNAKE_CASE",
                name
            ));
        }

        let index = match entry.get("index") {
            Some(toml::Value::Integer(i)) if *i >= 0 && (*i as usize) < MAX_CHANNELS => {
                Some(*i as usize)
            }
            Some(toml::Value::Integer(_)) => {
                errors.push(format!(
                    "[channel.{}] index must be 0-{}",
                    name,
                    MAX_CHANNELS - 1
                ));
                None
            }
            Some(_) => {
                errors.push(format!("[channel.{}] index must be an integer", name));
                None
            }
            None => {
                errors.push(format!("[channel.{}] missing 'index'", name));
                None
            }
        };

        let pin = match entry.get("pin") {
            Some(toml::Value::Integer(p)) if *p >= 0 && *p < i64::from(MAX_PIN_COUNT) => {
                Some(*p as u8)
            }
            Some(toml::Value::Integer(_)) => {
                errors.push(format!(
                    "[channel.{}] pin must be 0-{}",
                    name,
                    MAX_PIN_COUNT - 1
                ));
                None
            }
            Some(_) => {
                errors.push(format!("[channel.{}] pin must be an integer", name));
                None
            }
            None => {
                errors.push(format!("[channel.{}] missing 'pin'", name));
                None
            }
        };

        if let (Some(index), Some(pin)) = (index, pin) {
            channels.push(Channel {
                name: name.clone(),
                index,
                pin,
            });
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    channels.sort_by_key(|c| c.index);

    if let Some((expected, channel)) = channels
        .iter()
        .enumerate()
        .find(|(expected, channel)| channel.index != *expected)
    {
        return Err(vec![format!(
            "[channel.{}] index {} found, expected {} (no gaps or duplicates)",
            channel.name, channel.index, expected
        )]);
    }

    Ok(channels)
}

/// Emit the Rust source for the channel table
pub fn render(channels: &[Channel]) -> String {
    let mut out = String::new();

    out.push_str("// Generated by dio-board/build.rs from dio.toml. Do not edit.\n\n");

    for channel in channels {
        let _ = writeln!(
            out,
            "/// Channel `{}` (GPIO{})\npub const {}: ChannelId = {};",
            channel.name, channel.pin, channel.name, channel.index
        );
    }

    let _ = writeln!(
        out,
        "\n/// Number of configured channels\npub const CONFIGURED_CHANNEL_COUNT: usize = {};",
        channels.len()
    );

    let names = channels
        .iter()
        .map(|c| format!("\"{}\"", c.name))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(
        out,
        "\n/// Channel names, indexed by channel id\npub const CHANNEL_NAMES: [&str; CONFIGURED_CHANNEL_COUNT] = [{}];",
        names
    );

    let entries = channels
        .iter()
        .map(|c| format!("    ChannelConfig::new({}),", c.pin))
        .collect::<Vec<_>>()
        .join("\n");
    let _ = writeln!(
        out,
        "\n/// Board channel table\npub static DIO_CONFIG: DioConfig<CONFIGURED_CHANNEL_COUNT> = DioConfig::new([\n{}\n]);",
        entries
    );

    out
}
