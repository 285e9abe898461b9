//! Line-oriented command scripts executed against a [`World`].
//!
//! ```text
//! plant                 # -> $1
//! household             # -> $2
//! connect-plant $2 $1
//! powered $2
//! ```
//!
//! `$N` refers to the handle returned by the N-th successful creation, so a
//! script reads the same regardless of which suffixes the generator draws.

use crate::{errors::GridGraphError, world::World};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptCommand {
    CreatePowerPlant,
    CreateHousehold,
    ConnectPlant { household: String, plant: String },
    ConnectHousehold { first: String, second: String },
    Disconnect { household: String, plant: String },
    Kill { plant: String },
    Repair { plant: String },
    Powered { household: String },
    Snapshot,
}

impl ScriptCommand {
    pub fn parse(line: &str) -> Result<Option<Self>, GridGraphError> {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            return Ok(None);
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        let command = match parts.as_slice() {
            ["plant"] => ScriptCommand::CreatePowerPlant,
            ["household"] => ScriptCommand::CreateHousehold,
            ["connect-plant", household, plant] => ScriptCommand::ConnectPlant {
                household: household.to_string(),
                plant: plant.to_string(),
            },
            ["connect-household", first, second] => ScriptCommand::ConnectHousehold {
                first: first.to_string(),
                second: second.to_string(),
            },
            ["disconnect", household, plant] => ScriptCommand::Disconnect {
                household: household.to_string(),
                plant: plant.to_string(),
            },
            ["kill", plant] => ScriptCommand::Kill {
                plant: plant.to_string(),
            },
            ["repair", plant] => ScriptCommand::Repair {
                plant: plant.to_string(),
            },
            ["powered", household] => ScriptCommand::Powered {
                household: household.to_string(),
            },
            ["snapshot"] => ScriptCommand::Snapshot,
            [name, ..] => {
                return Err(GridGraphError::invalid_input(format!(
                    "unknown command or wrong arity: {name}"
                )));
            }
            [] => return Ok(None),
        };
        Ok(Some(command))
    }
}

/// Executes scripts, remembering created handles for `$N` references.
#[derive(Debug)]
pub struct ScriptRunner {
    world: World,
    created: Vec<String>,
}

impl ScriptRunner {
    pub fn new(world: World) -> Self {
        Self {
            world,
            created: Vec::new(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Runs every line and returns one output line per command.
    pub fn run(&mut self, script: &str) -> Result<Vec<String>, GridGraphError> {
        let mut output = Vec::new();
        for (idx, line) in script.lines().enumerate() {
            let command = ScriptCommand::parse(line).map_err(|err| at_line(idx, err))?;
            if let Some(command) = command {
                output.push(self.execute(&command).map_err(|err| at_line(idx, err))?);
            }
        }
        Ok(output)
    }

    pub fn execute(&mut self, command: &ScriptCommand) -> Result<String, GridGraphError> {
        let line = match command {
            ScriptCommand::CreatePowerPlant => {
                let created = self.world.create_power_plant();
                self.record(created)
            }
            ScriptCommand::CreateHousehold => {
                let created = self.world.create_household();
                self.record(created)
            }
            ScriptCommand::ConnectPlant { household, plant } => {
                let (household, plant) = (self.lookup(household)?, self.lookup(plant)?);
                self.world
                    .connect_household_to_power_plant(&household, &plant)
                    .to_string()
            }
            ScriptCommand::ConnectHousehold { first, second } => {
                let (first, second) = (self.lookup(first)?, self.lookup(second)?);
                self.world
                    .connect_household_to_household(&first, &second)
                    .to_string()
            }
            ScriptCommand::Disconnect { household, plant } => {
                let (household, plant) = (self.lookup(household)?, self.lookup(plant)?);
                self.world
                    .disconnect_household_from_power_plant(&household, &plant)
                    .to_string()
            }
            ScriptCommand::Kill { plant } => {
                let plant = self.lookup(plant)?;
                self.world.kill_power_plant(&plant).to_string()
            }
            ScriptCommand::Repair { plant } => {
                let plant = self.lookup(plant)?;
                self.world.repair_power_plant(&plant).to_string()
            }
            ScriptCommand::Powered { household } => {
                let household = self.lookup(household)?;
                self.world.household_has_electricity(&household).to_string()
            }
            ScriptCommand::Snapshot => self.world.grid().snapshot().to_json()?,
        };
        Ok(line)
    }

    fn record(&mut self, created: Option<String>) -> String {
        match created {
            Some(handle) => {
                self.created.push(handle.clone());
                handle
            }
            None => "false".to_string(),
        }
    }

    fn lookup(&self, arg: &str) -> Result<String, GridGraphError> {
        let Some(index) = arg.strip_prefix('$') else {
            return Ok(arg.to_string());
        };
        index
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|n| self.created.get(n))
            .cloned()
            .ok_or_else(|| GridGraphError::invalid_input(format!("unbound reference {arg}")))
    }
}

fn at_line(idx: usize, err: GridGraphError) -> GridGraphError {
    GridGraphError::invalid_input(format!("line {}: {err}", idx + 1))
}
