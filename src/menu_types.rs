// Scene the session is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Title,
    Game,
}

// Title screen option selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Start,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 2] = [MenuOption::Start, MenuOption::Exit];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Start => "Start",
            MenuOption::Exit => "Exit",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            MenuOption::Start => MenuOption::Exit,
            MenuOption::Exit => MenuOption::Start,
        }
    }

    // Two options, so previous and next coincide
    #[must_use]
    pub fn prev(self) -> Self {
        self.next()
    }
}

#[derive(Debug, Clone)]
pub struct Menu {
    pub state: MenuState,
    pub selected_option: MenuOption,
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            state: MenuState::Title,
            selected_option: MenuOption::Start,
        }
    }
}

impl Menu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
