/// A line typed into the interactive client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ShowRegister,
    Register {
        username: String,
        password: String,
        confirm_password: String,
    },
    ShowLogin,
    Login {
        username: String,
        password: String,
    },
    Logout,
    Create {
        name: String,
    },
    Delete {
        id: String,
    },
    Play,
    Lobby,
    Status,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  register                                 show the registration screen
  register <username> <password> <confirm> create an account
  login [<username>] <password>            log in (username defaults to the last one used)
  logout
  create <name>                            create a game
  delete <id>                              delete one of your games
  play                                     open the game screen
  lobby                                    back to the lobby
  status                                   time until the next refresh
  help
  quit";

impl Command {
    /// Parse one input line. `remembered` fills in a login without a username.
    pub fn parse(line: &str, remembered: Option<&str>) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let args: Vec<&str> = rest.split_whitespace().collect();

        match (verb, args.as_slice()) {
            ("register", []) => Ok(Self::ShowRegister),
            ("register", [username, password, confirm]) => Ok(Self::Register {
                username: username.to_string(),
                password: password.to_string(),
                confirm_password: confirm.to_string(),
            }),
            ("register", _) => Err("usage: register <username> <password> <confirm>".to_string()),
            ("login", []) => Ok(Self::ShowLogin),
            ("login", [username, password]) => Ok(Self::Login {
                username: username.to_string(),
                password: password.to_string(),
            }),
            ("login", [password]) => match remembered {
                Some(username) => Ok(Self::Login {
                    username: username.to_string(),
                    password: password.to_string(),
                }),
                None => Err("usage: login <username> <password>".to_string()),
            },
            ("login", _) => Err("usage: login <username> <password>".to_string()),
            ("logout", []) => Ok(Self::Logout),
            ("create", _) if !rest.is_empty() => Ok(Self::Create {
                name: rest.to_string(),
            }),
            ("create", _) => Err("usage: create <name>".to_string()),
            ("delete", [id]) => Ok(Self::Delete { id: id.to_string() }),
            ("delete", _) => Err("usage: delete <id>".to_string()),
            ("play", []) => Ok(Self::Play),
            ("lobby", []) => Ok(Self::Lobby),
            ("status", []) => Ok(Self::Status),
            ("help", _) | ("", _) => Ok(Self::Help),
            ("quit" | "exit", []) => Ok(Self::Quit),
            (other, _) => Err(format!("unknown command `{}`, try `help`", other)),
        }
    }
}
