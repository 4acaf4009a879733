/// An option the engine advertised in reply to `uci`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UciOption {
    pub name: String,
    pub option_type: UciOptionType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciOptionType {
    Spin { default: i64, min: i64, max: i64 },
    Check { default: bool },
    Combo { default: String, vars: Vec<String> },
    String { default: String },
    Button,
}

impl UciOption {
    /// Parses the part of an `option` line after the `option` keyword:
    /// `name <name> type <type> [default <v>] [min <v>] [max <v>] [var <v>]*`.
    pub fn parse(input: &str) -> Option<UciOption> {
        let rest = input.trim().strip_prefix("name ")?;
        let (name, rest) = rest.split_once(" type ")?;

        let mut tokens = rest.split_whitespace();
        let kind = tokens.next()?;
        let fields = collect_fields(tokens);

        let option_type = match kind {
            "spin" => UciOptionType::Spin {
                default: field(&fields, "default")?.parse().ok()?,
                min: field(&fields, "min")?.parse().ok()?,
                max: field(&fields, "max")?.parse().ok()?,
            },
            "check" => UciOptionType::Check {
                default: field(&fields, "default")? == "true",
            },
            "combo" => UciOptionType::Combo {
                default: field(&fields, "default").unwrap_or_default(),
                vars: fields
                    .iter()
                    .filter(|(key, _)| *key == "var")
                    .map(|(_, value)| value.clone())
                    .collect(),
            },
            "string" => UciOptionType::String {
                default: field(&fields, "default").unwrap_or_default(),
            },
            "button" => UciOptionType::Button,
            _ => return None,
        };

        Some(UciOption {
            name: name.trim().to_string(),
            option_type,
        })
    }
}

impl UciOptionType {
    pub fn validate(&self, value: &str) -> Result<(), String> {
        match self {
            UciOptionType::Spin { min, max, .. } => {
                let parsed = value
                    .parse::<i64>()
                    .map_err(|e| format!("Invalid integer: {}", e))?;
                if parsed < *min || parsed > *max {
                    return Err(format!("Value {} out of range [{}, {}]", parsed, min, max));
                }
                Ok(())
            }
            UciOptionType::Check { .. } => match value.to_lowercase().as_str() {
                "true" | "false" => Ok(()),
                _ => Err("Boolean value must be 'true' or 'false'".to_string()),
            },
            UciOptionType::Combo { vars, .. } => {
                if vars.iter().any(|v| v.eq_ignore_ascii_case(value)) {
                    Ok(())
                } else {
                    Err(format!("Value {} is not one of [{}]", value, vars.join(", ")))
                }
            }
            UciOptionType::String { .. } => Ok(()),
            UciOptionType::Button => Err("Button options take no value".to_string()),
        }
    }
}

const KEYWORDS: [&str; 4] = ["default", "min", "max", "var"];

// Groups `key value...` pairs; values may contain spaces (combo vars, string defaults).
fn collect_fields<'a>(tokens: impl Iterator<Item = &'a str>) -> Vec<(&'a str, String)> {
    let mut fields: Vec<(&str, String)> = Vec::new();
    for token in tokens {
        if KEYWORDS.contains(&token) {
            fields.push((token, String::new()));
        } else if let Some((_, value)) = fields.last_mut() {
            if !value.is_empty() {
                value.push(' ');
            }
            value.push_str(token);
        }
    }
    fields
}

fn field(fields: &[(&str, String)], key: &str) -> Option<String> {
    fields
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, value)| match value.as_str() {
            "<empty>" => String::new(),
            _ => value.clone(),
        })
}
