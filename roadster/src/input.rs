use rustc_hash::FxHashMap;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    KeyPress { key: Key, repeat: bool },
    KeyRelease { key: Key },
    Unknown,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Escape,
    Backspace,
    Space,
    Tab,
    Control,
    Shift,
    Alt,

    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,

    KeyA,
    KeyB,
    KeyC,
    KeyD,
    KeyE,
    KeyF,
    KeyG,
    KeyH,
    KeyI,
    KeyJ,
    KeyK,
    KeyL,
    KeyM,
    KeyN,
    KeyO,
    KeyP,
    KeyQ,
    KeyR,
    KeyS,
    KeyT,
    KeyU,
    KeyV,
    KeyW,
    KeyX,
    KeyY,
    KeyZ,

    #[default]
    Unknown,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Accelerate,
    Brake,
    TurnLeft,
    TurnRight,
    Boost,
    ToggleCamera,
    ToggleMenu,
}

pub struct KeyBindings {
    map: FxHashMap<Key, Action>,
}

#[derive(Default)]
pub struct InputCollector {
    pub bindings: KeyBindings,

    accelerate: bool,
    brake: bool,
    turn_left: bool,
    turn_right: bool,
    boost: bool,
    toggle_camera: u32,
    toggle_menu: u32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub accelerate: bool,
    pub brake: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub boost: bool,
    pub toggle_camera: u32,
    pub toggle_menu: u32,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut map = FxHashMap::default();
        map.insert(Key::KeyW, Action::Accelerate);
        map.insert(Key::ArrowUp, Action::Accelerate);
        map.insert(Key::KeyS, Action::Brake);
        map.insert(Key::ArrowDown, Action::Brake);
        map.insert(Key::KeyA, Action::TurnLeft);
        map.insert(Key::ArrowLeft, Action::TurnLeft);
        map.insert(Key::KeyD, Action::TurnRight);
        map.insert(Key::ArrowRight, Action::TurnRight);
        map.insert(Key::Shift, Action::Boost);
        map.insert(Key::KeyC, Action::ToggleCamera);
        map.insert(Key::Escape, Action::ToggleMenu);

        Self { map }
    }

    pub fn bind(&mut self, key: Key, action: Action) {
        self.map.insert(key, action);
    }

    pub fn unbind(&mut self, key: Key) {
        self.map.remove(&key);
    }

    pub fn action(&self, key: Key) -> Option<Action> {
        self.map.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl InputCollector {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn collect(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyPress { key, repeat } => {
                let action = match self.bindings.action(key) {
                    Some(action) => action,
                    None => return,
                };

                match action {
                    Action::Accelerate => self.accelerate = true,
                    Action::Brake => self.brake = true,
                    Action::TurnLeft => self.turn_left = true,
                    Action::TurnRight => self.turn_right = true,
                    Action::Boost => self.boost = true,
                    // Toggles fire on the edge only, auto-repeat must not retrigger them
                    Action::ToggleCamera if !repeat => self.toggle_camera += 1,
                    Action::ToggleMenu if !repeat => self.toggle_menu += 1,
                    _ => {}
                }
            }
            InputEvent::KeyRelease { key } => {
                let action = match self.bindings.action(key) {
                    Some(action) => action,
                    None => return,
                };

                match action {
                    Action::Accelerate => self.accelerate = false,
                    Action::Brake => self.brake = false,
                    Action::TurnLeft => self.turn_left = false,
                    Action::TurnRight => self.turn_right = false,
                    Action::Boost => self.boost = false,
                    _ => {}
                }
            }
            InputEvent::Unknown => {}
        }
    }

    pub fn snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            accelerate: self.accelerate,
            brake: self.brake,
            turn_left: self.turn_left,
            turn_right: self.turn_right,
            boost: self.boost,
            toggle_camera: self.toggle_camera,
            toggle_menu: self.toggle_menu,
        };

        self.toggle_camera = 0;
        self.toggle_menu = 0;

        snapshot
    }
}
