use roadster::error_continue;
use roadster::input::InputEvent;
use roadster::input::Key;

pub const DEFAULT_SCRIPT: &str = include_str!("../data/drive.script");

pub struct ScriptEvent {
    pub frame: u32,
    pub event: InputEvent,
}

pub fn parse(source: &str) -> Vec<ScriptEvent> {
    let mut events = Vec::new();

    for (number, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let tokens = line.split_whitespace().collect::<Vec<&str>>();
        if tokens.len() != 3 {
            error_continue!("Invalid script line {} ({})", number + 1, line);
        }

        let frame = match tokens[0].parse::<u32>() {
            Ok(frame) => frame,
            Err(_) => error_continue!("Invalid frame number on line {} ({})", number + 1, tokens[0]),
        };

        let key = match parse_key(tokens[1]) {
            Some(key) => key,
            None => error_continue!("Unknown key on line {} ({})", number + 1, tokens[1]),
        };

        let event = match tokens[2] {
            "press" => InputEvent::KeyPress { key, repeat: false },
            "release" => InputEvent::KeyRelease { key },
            _ => error_continue!("Unknown action on line {} ({})", number + 1, tokens[2]),
        };

        events.push(ScriptEvent { frame, event });
    }

    events.sort_by_key(|event| event.frame);
    events
}

fn parse_key(name: &str) -> Option<Key> {
    match name.to_lowercase().as_str() {
        "w" => Some(Key::KeyW),
        "a" => Some(Key::KeyA),
        "s" => Some(Key::KeyS),
        "d" => Some(Key::KeyD),
        "c" => Some(Key::KeyC),
        "shift" => Some(Key::Shift),
        "space" => Some(Key::Space),
        "escape" => Some(Key::Escape),
        "enter" => Some(Key::Enter),
        "up" => Some(Key::ArrowUp),
        "down" => Some(Key::ArrowDown),
        "left" => Some(Key::ArrowLeft),
        "right" => Some(Key::ArrowRight),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_presses_and_releases() {
        let events = parse("0 w press\n10 w release");

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].frame, 0);
        assert_eq!(events[0].event, InputEvent::KeyPress { key: Key::KeyW, repeat: false });
        assert_eq!(events[1].event, InputEvent::KeyRelease { key: Key::KeyW });
    }

    #[test]
    fn skips_comments_and_malformed_lines() {
        let events = parse("# comment\n\n0 w press\nnot a line\n5 q press\n7 w sideways");

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].frame, 0);
    }

    #[test]
    fn orders_events_by_frame() {
        let events = parse("20 s press\n5 w press\n20 shift press");

        assert_eq!(events[0].frame, 5);
        assert_eq!(events[1].frame, 20);
        assert_eq!(events[1].event, InputEvent::KeyPress { key: Key::KeyS, repeat: false });
        assert_eq!(events[2].event, InputEvent::KeyPress { key: Key::Shift, repeat: false });
    }

    #[test]
    fn default_script_is_fully_valid() {
        let events = parse(DEFAULT_SCRIPT);
        assert_eq!(events.len(), DEFAULT_SCRIPT.lines().filter(|line| !line.is_empty() && !line.starts_with('#')).count());
    }
}
