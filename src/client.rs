use crate::config::GridConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub grid: GridConfig,
    pub script: Option<String>,
    pub json: bool,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut grid = GridConfig::default();
        let mut script = None;
        let mut json = false;
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--seed" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| "--seed requires a value".to_string())?;
                    grid.seed = Some(
                        value
                            .parse()
                            .map_err(|_| format!("invalid seed {value}"))?,
                    );
                }
                "--max-suffix" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| "--max-suffix requires a value".to_string())?;
                    grid.max_suffix = value
                        .parse()
                        .map_err(|_| format!("invalid max suffix {value}"))?;
                }
                "--script" => {
                    script = Some(
                        iter.next()
                            .ok_or_else(|| "--script requires a value".to_string())?
                            .to_string(),
                    );
                }
                "--json" => json = true,
                "-" => script = Some("-".to_string()),
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                other => {
                    script = Some(other.to_string());
                }
            }
        }
        grid.validate().map_err(|e| e.to_string())?;
        Ok(Self { grid, script, json })
    }

    pub fn help() -> &'static str {
        "Usage: gridgraph [--seed N] [--max-suffix N] [--json] [--script PATH|-]\n\
         Reads commands from PATH or stdin: plant, household, connect-plant H P,\n\
         connect-household A B, disconnect H P, kill P, repair P, powered H, snapshot\n"
    }
}
