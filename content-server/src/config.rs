use std::net::SocketAddr;
use std::ops::Deref;
use std::str::FromStr;

use envconfig::Envconfig;
use time::macros::format_description;
use time::Date;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlexBool(pub bool);

impl FromStr for FlexBool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(FlexBool(true)),
            "false" | "0" | "no" | "off" | "" => Ok(FlexBool(false)),
            _ => Err(format!("Invalid boolean value: {}", s)),
        }
    }
}

impl Deref for FlexBool {
    type Target = bool;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A `YYYY-MM-DD` day, as accepted by `REFERENCE_DATE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceDate(pub Date);

impl FromStr for ReferenceDate {
    type Err = time::error::Parse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = Date::parse(s.trim(), format_description!("[year]-[month]-[day]"))?;
        Ok(ReferenceDate(date))
    }
}

#[derive(Envconfig, Clone, Debug)]
pub struct Config {
    #[envconfig(default = "127.0.0.1:3010")]
    pub address: SocketAddr,

    // Pretty, span-annotated logs instead of JSON lines
    #[envconfig(from = "DEBUG", default = "false")]
    pub debug: FlexBool,

    #[envconfig(default = "true")]
    pub export_prometheus: bool,

    // Unset means "today, UTC"
    pub reference_date: Option<ReferenceDate>,

    #[envconfig(default = "5000")]
    pub max_batch_size: usize,

    #[envconfig(default = "128")]
    pub max_identifier_length: usize,

    #[envconfig(default = "1000")]
    pub max_concurrency: usize,
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn flex_bool_accepts_common_spellings() {
        assert_eq!("Yes".parse::<FlexBool>().unwrap(), FlexBool(true));
        assert_eq!(" 0 ".parse::<FlexBool>().unwrap(), FlexBool(false));
        assert!("maybe".parse::<FlexBool>().is_err());
    }

    #[test]
    fn reference_date_parses_iso_days() {
        assert_eq!(
            "2026-10-19".parse::<ReferenceDate>().unwrap(),
            ReferenceDate(date!(2026 - 10 - 19))
        );
        assert!("19/10/2026".parse::<ReferenceDate>().is_err());
        assert!("2026-02-30".parse::<ReferenceDate>().is_err());
    }
}
