use std::ops::Deref;

use serde::Deserialize;

/// A duration given as whitespace-separated parts with a unit suffix, e.g.
/// `"30s"`, `"5m"` or `"1h 30m"`. Supported units are seconds (`s`), minutes
/// (`m`), hours (`h`) and days (`d`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s)
            .map(Self)
            .ok_or_else(|| serde::de::Error::custom("Invalid duration"))
    }
}

fn parse(s: &str) -> Option<std::time::Duration> {
    let mut out = std::time::Duration::ZERO;
    for part in s.split_whitespace() {
        let unit = part.chars().next_back()?;
        let value = part[..part.len() - unit.len_utf8()].parse::<u64>().ok()?;
        let seconds = match unit {
            's' => value,
            'm' => value.checked_mul(60)?,
            'h' => value.checked_mul(60 * 60)?,
            'd' => value.checked_mul(24 * 60 * 60)?,
            _ => return None,
        };
        out = out.checked_add(std::time::Duration::from_secs(seconds))?;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration() {
        for (input, expected) in [
            ("13s", Some(13)),
            ("42m", Some(42 * 60)),
            ("7h", Some(7 * 60 * 60)),
            ("20d", Some(20 * 24 * 60 * 60)),
            ("", Some(0)),
            ("1d 2h 3m 4s", Some(((24 + 2) * 60 + 3) * 60 + 4)),
            ("xyz", None),
            ("7", None),
            ("7dd", None),
            ("s", None),
        ] {
            let input = serde_json::Value::String(input.into());
            let output = serde_json::from_value::<Duration>(input)
                .ok()
                .map(|x| x.0.as_secs());
            assert_eq!(output, expected);
        }
    }
}
