// Server log line parsing
//
// The game server reports chat and roster changes on its log stream:
//   [12:00:00] [Server thread/INFO]: <Steve> !give diamond 2
//   [12:00:00] [Server thread/INFO]: Steve joined the game
//   [12:00:00] [Server thread/INFO]: Steve left the game

/// Something the dispatcher cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    Chat { user: String, message: String },
    Joined { user: String },
    Left { user: String },
}

const JOINED_SUFFIX: &str = " joined the game";
const LEFT_SUFFIX: &str = " left the game";

fn is_player_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Strip the `[time] [thread/LEVEL]: ` header, if the line has one
fn message_body(line: &str) -> &str {
    let line = line.trim_end_matches(['\r', '\n']);
    if !line.starts_with('[') {
        return line;
    }
    match line.find("]: ") {
        Some(pos) => &line[pos + 3..],
        None => line,
    }
}

/// Parse one log line. Anything that is not chat, a join or a leave is `None`.
pub fn parse_log_line(line: &str) -> Option<ServerEvent> {
    let body = message_body(line);

    if let Some(rest) = body.strip_prefix('<') {
        let (user, message) = rest.split_once("> ")?;
        if !is_player_name(user) {
            return None;
        }
        return Some(ServerEvent::Chat {
            user: user.to_string(),
            message: message.to_string(),
        });
    }

    if let Some(user) = body.strip_suffix(JOINED_SUFFIX).filter(|u| is_player_name(u)) {
        return Some(ServerEvent::Joined { user: user.to_string() });
    }

    if let Some(user) = body.strip_suffix(LEFT_SUFFIX).filter(|u| is_player_name(u)) {
        return Some(ServerEvent::Left { user: user.to_string() });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chat() {
        let event = parse_log_line("[12:00:00] [Server thread/INFO]: <Steve> !give diamond 2m");
        assert_eq!(
            event,
            Some(ServerEvent::Chat {
                user: "Steve".to_string(),
                message: "!give diamond 2m".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_chat_keeps_angle_brackets_in_message() {
        let event = parse_log_line("[12:00:00] [Server thread/INFO]: <Alex> 1 < 2 > 0\r\n");
        assert_eq!(
            event,
            Some(ServerEvent::Chat {
                user: "Alex".to_string(),
                message: "1 < 2 > 0".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_join_and_leave() {
        assert_eq!(
            parse_log_line("[08:15:02] [Server thread/INFO]: Notch joined the game"),
            Some(ServerEvent::Joined { user: "Notch".to_string() })
        );
        assert_eq!(
            parse_log_line("[08:45:10] [Server thread/INFO]: Notch left the game"),
            Some(ServerEvent::Left { user: "Notch".to_string() })
        );
    }

    #[test]
    fn test_parse_without_header() {
        assert_eq!(
            parse_log_line("jeb_ joined the game"),
            Some(ServerEvent::Joined { user: "jeb_".to_string() })
        );
    }

    #[test]
    fn test_ignores_other_lines() {
        let startup = "[12:00:00] [Server thread/INFO]: Done (3.2s)! For help, type \"help\"";
        assert_eq!(parse_log_line(startup), None);
        assert_eq!(parse_log_line("[12:00:00] [Server thread/INFO]: [Server] hello"), None);
        assert_eq!(parse_log_line("[12:00:00] [Server thread/WARN]: Can't keep up!"), None);
        assert_eq!(parse_log_line(""), None);
    }

    #[test]
    fn test_rejects_spoofed_names() {
        // a player cannot fake a join by chatting it
        assert_eq!(
            parse_log_line("[12:00:00] [Server thread/INFO]: <Steve> Notch joined the game"),
            Some(ServerEvent::Chat {
                user: "Steve".to_string(),
                message: "Notch joined the game".to_string(),
            })
        );
        assert_eq!(parse_log_line("[12:00:00] [Server thread/INFO]: <Not a name> hi"), None);
        let spaced = "[12:00:00] [Server thread/INFO]: Two words joined the game";
        assert_eq!(parse_log_line(spaced), None);
    }
}
