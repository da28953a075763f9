//! Line command parsing.

use std::str::FromStr;

use pointbuy_domain::Attribute;

/// One parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Systems,
    Select(String),
    Custom {
        min_value: i32,
        max_value: i32,
        point_budget: i32,
    },
    Delta {
        attribute: Attribute,
        step: i32,
    },
    Reset,
    Default,
    Random,
    Show,
    Save,
    Load {
        force: bool,
    },
    Clear,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command: {0} (try 'help')")]
    UnknownCommand(String),
    #[error("'{command}' needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("'{command}' takes no more arguments, got '{extra}'")]
    UnexpectedArgument { command: &'static str, extra: String },
    #[error("Not a whole number: {0}")]
    InvalidNumber(String),
}

impl CommandError {
    fn missing(command: &'static str, argument: &'static str) -> Self {
        Self::MissingArgument { command, argument }
    }
}

pub const HELP: &str = "\
Commands:
  systems                      list cost systems
  select <id>                  switch cost system (values are clamped)
  custom <min> <max> <budget>  configure and select the custom system
  <attr> <+n|-n>               change an attribute, e.g. 'str +5', 'cha -1'
  inc <attr> [n] / dec <attr> [n]
  reset                        every attribute to the minimum
  default                      every attribute to the +0 modifier score
  random                       random valid distribution
  show                         current attributes and remaining points
  save                         save a draft
  load [force]                 restore the saved draft
  clear                        delete the saved draft
  help                         this text
  quit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };
        let rest: Vec<&str> = words.collect();

        let command = match head.to_ascii_lowercase().as_str() {
            "systems" => bare("systems", &rest, Self::Systems)?,
            "select" => {
                let [id] = exact::<1>("select", "system id", &rest)?;
                Self::Select(id.to_string())
            }
            "custom" => {
                let [min, max, budget] = exact::<3>("custom", "min, max and budget", &rest)?;
                Self::Custom {
                    min_value: number(min)?,
                    max_value: number(max)?,
                    point_budget: number(budget)?,
                }
            }
            "inc" | "dec" => {
                let name = if head.eq_ignore_ascii_case("inc") { "inc" } else { "dec" };
                let (attribute, amount) = match rest.as_slice() {
                    [] => return Err(CommandError::missing(name, "attribute")),
                    [attribute] => (*attribute, 1),
                    [attribute, amount] => (*attribute, number(amount)?),
                    [_, _, extra, ..] => return Err(unexpected(name, extra)),
                };
                let step = if name == "inc" { amount } else { -amount };
                Self::Delta {
                    attribute: attribute_named(attribute)?,
                    step,
                }
            }
            "reset" => bare("reset", &rest, Self::Reset)?,
            "default" => bare("default", &rest, Self::Default)?,
            "random" => bare("random", &rest, Self::Random)?,
            "show" => bare("show", &rest, Self::Show)?,
            "save" => bare("save", &rest, Self::Save)?,
            "load" => match rest.as_slice() {
                [] => Self::Load { force: false },
                [flag] if flag.eq_ignore_ascii_case("force") => Self::Load { force: true },
                [extra, ..] => return Err(unexpected("load", extra)),
            },
            "clear" => bare("clear", &rest, Self::Clear)?,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => {
                let attribute = attribute_named(head)?;
                let [step] = exact::<1>("attribute", "step such as +1 or -5", &rest)?;
                Self::Delta {
                    attribute,
                    step: number(step)?,
                }
            }
        };
        Ok(command)
    }
}

fn bare(command: &'static str, rest: &[&str], parsed: Command) -> Result<Command, CommandError> {
    match rest.first() {
        Some(extra) => Err(unexpected(command, extra)),
        None => Ok(parsed),
    }
}

fn exact<'a, const N: usize>(
    command: &'static str,
    argument: &'static str,
    rest: &[&'a str],
) -> Result<[&'a str; N], CommandError> {
    if rest.len() > N {
        return Err(unexpected(command, rest[N]));
    }
    <[&str; N]>::try_from(rest).map_err(|_| CommandError::missing(command, argument))
}

fn unexpected(command: &'static str, extra: &str) -> CommandError {
    CommandError::UnexpectedArgument {
        command,
        extra: extra.to_string(),
    }
}

fn number(raw: &str) -> Result<i32, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::InvalidNumber(raw.to_string()))
}

fn attribute_named(raw: &str) -> Result<Attribute, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::UnknownCommand(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, CommandError> {
        line.parse()
    }

    #[test]
    fn parses_plain_commands() {
        assert_eq!(parse("systems"), Ok(Command::Systems));
        assert_eq!(parse("  RESET "), Ok(Command::Reset));
        assert_eq!(parse("default"), Ok(Command::Default));
        assert_eq!(parse("random"), Ok(Command::Random));
        assert_eq!(parse("show"), Ok(Command::Show));
        assert_eq!(parse("save"), Ok(Command::Save));
        assert_eq!(parse("clear"), Ok(Command::Clear));
        assert_eq!(parse("?"), Ok(Command::Help));
        assert_eq!(parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn parses_select_and_custom() {
        assert_eq!(
            parse("select pathfinder"),
            Ok(Command::Select("pathfinder".to_string()))
        );
        assert_eq!(
            parse("custom 6 18 32"),
            Ok(Command::Custom {
                min_value: 6,
                max_value: 18,
                point_budget: 32,
            })
        );
        assert_eq!(
            parse("custom 6 18"),
            Err(CommandError::missing("custom", "min, max and budget"))
        );
        assert_eq!(
            parse("custom 6 x 32"),
            Err(CommandError::InvalidNumber("x".to_string()))
        );
    }

    #[test]
    fn parses_signed_attribute_steps() {
        assert_eq!(
            parse("str +5"),
            Ok(Command::Delta {
                attribute: Attribute::Strength,
                step: 5,
            })
        );
        assert_eq!(
            parse("Charisma -1"),
            Ok(Command::Delta {
                attribute: Attribute::Charisma,
                step: -1,
            })
        );
        assert!(matches!(
            parse("wis"),
            Err(CommandError::MissingArgument { .. })
        ));
    }

    #[test]
    fn parses_inc_and_dec() {
        assert_eq!(
            parse("inc dex"),
            Ok(Command::Delta {
                attribute: Attribute::Dexterity,
                step: 1,
            })
        );
        assert_eq!(
            parse("dec con 5"),
            Ok(Command::Delta {
                attribute: Attribute::Constitution,
                step: -5,
            })
        );
        assert_eq!(parse("inc"), Err(CommandError::missing("inc", "attribute")));
    }

    #[test]
    fn parses_load_flag() {
        assert_eq!(parse("load"), Ok(Command::Load { force: false }));
        assert_eq!(parse("load FORCE"), Ok(Command::Load { force: true }));
        assert!(matches!(
            parse("load now"),
            Err(CommandError::UnexpectedArgument { .. })
        ));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse("   "), Err(CommandError::Empty));
        assert_eq!(
            parse("fly away"),
            Err(CommandError::UnknownCommand("fly".to_string()))
        );
        assert!(matches!(
            parse("show all"),
            Err(CommandError::UnexpectedArgument { command: "show", .. })
        ));
        assert!(matches!(
            parse("select a b"),
            Err(CommandError::UnexpectedArgument { command: "select", .. })
        ));
    }
}
