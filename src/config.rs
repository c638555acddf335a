use std::path::PathBuf;

const DEFAULT_ROSTER: &str = "data/teams.csv";
const DEFAULT_OUTPUT: &str = "schedule.txt";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Schedule a roster file, or the demo league when `roster` is None
    Cli { roster: Option<PathBuf> },
    Web { port: u16 },
}

/// Settings read once at start-up from the command line and environment
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub mode: Mode,
    pub seed: Option<u64>,
    pub admin_password: String,
    pub output_path: PathBuf,
}

impl RunConfig {
    pub fn from_env() -> Self {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_parts(&args, |key| std::env::var(key).ok())
    }

    /// `args` excludes the program name
    pub fn from_parts(args: &[String], env: impl Fn(&str) -> Option<String>) -> Self {
        let mode = match args.first().map(String::as_str) {
            Some("web") => Mode::Web {
                port: args.get(1)
                    .and_then(|p| p.parse::<u16>().ok())
                    .unwrap_or(DEFAULT_PORT),
            },
            Some(path) => Mode::Cli { roster: Some(PathBuf::from(path)) },
            None => {
                let fallback = PathBuf::from(DEFAULT_ROSTER);
                Mode::Cli { roster: fallback.exists().then_some(fallback) }
            }
        };

        Self {
            mode,
            seed: env("SCHEDULE_SEED").and_then(|s| s.trim().parse().ok()),
            admin_password: env("ADMIN_PASSWORD").unwrap_or_else(|| "admin123".to_string()),
            output_path: env("SCHEDULE_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_web_mode_with_port() {
        let config = RunConfig::from_parts(&args(&["web", "9000"]), |_| None);
        assert_eq!(config.mode, Mode::Web { port: 9000 });
        assert_eq!(config.admin_password, "admin123");
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_web_mode_bad_port_uses_default() {
        let config = RunConfig::from_parts(&args(&["web", "http"]), |_| None);
        assert_eq!(config.mode, Mode::Web { port: DEFAULT_PORT });
    }

    #[test]
    fn test_cli_mode_reads_env() {
        let env: HashMap<&str, &str> = [
            ("SCHEDULE_SEED", "42"),
            ("ADMIN_PASSWORD", "hunter2"),
            ("SCHEDULE_OUTPUT", "out/league.txt"),
        ]
        .into_iter()
        .collect();
        let config = RunConfig::from_parts(&args(&["teams.csv"]), |k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.mode, Mode::Cli { roster: Some(PathBuf::from("teams.csv")) });
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.admin_password, "hunter2");
        assert_eq!(config.output_path, PathBuf::from("out/league.txt"));
    }
}
