use clap::Parser;

/// Chat with a Gemini model from your terminal.
#[derive(Parser, Debug)]
#[command(name = "gembot", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Model identifier override (e.g. gemini-2.0-flash).
    #[arg(short = 'm', long, value_parser = parse_model)]
    pub model: Option<String>,

    /// Log filter override (e.g. debug, gembot=trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Apply the `model.name` rules from the config file to `--model`.
fn parse_model(value: &str) -> Result<String, String> {
    let model = value.trim();
    gembot_config::validate_model_name("--model", model).map_err(|e| e.to_string())?;
    Ok(model.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_valid() {
        let args = Args::parse_from(["gembot"]);
        assert!(args.config.is_none());
        assert!(args.model.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn all_overrides_parse() {
        let args = Args::parse_from([
            "gembot",
            "--config",
            "/tmp/gembot.toml",
            "-m",
            "gemini-2.0-flash",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.config.as_deref(), Some("/tmp/gembot.toml"));
        assert_eq!(args.model.as_deref(), Some("gemini-2.0-flash"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn model_override_is_trimmed() {
        let args = Args::parse_from(["gembot", "--model", " gemini-2.0-flash "]);
        assert_eq!(args.model.as_deref(), Some("gemini-2.0-flash"));
    }

    #[test]
    fn model_override_follows_config_rules() {
        for bad in ["models/gemini-pro", "gemini pro", "   "] {
            let err = Args::try_parse_from(["gembot", "-m", bad]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation, "{bad:?}");
        }

        let err = Args::try_parse_from(["gembot", "-m", "models/gemini-pro"]).unwrap_err();
        assert!(err.to_string().contains("must not contain '/'"));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["gembot", "--stream"]).is_err());
    }
}
