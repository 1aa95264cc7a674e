//! Output format selection

use std::fmt;

use clap::ValueEnum;

/// How size reports and workspace listings are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table with binary size units
    Table,
    /// One header row, raw byte counts
    Csv,
    /// Pretty-printed JSON
    Json,
    /// YAML document
    #[value(alias = "yml")]
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_cli_value() {
        for format in OutputFormat::value_variants() {
            let parsed = OutputFormat::from_str(&format.to_string(), false).unwrap();
            assert_eq!(&parsed, format);
        }
    }

    #[test]
    fn test_yml_alias() {
        assert_eq!(
            OutputFormat::from_str("yml", false).unwrap(),
            OutputFormat::Yaml
        );
        assert_eq!(OutputFormat::Yaml.to_string(), "yaml");
    }
}
