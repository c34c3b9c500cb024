/// Boolean flag with explicit on/off/flip transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Toggle(bool);

impl Toggle {
    pub const fn new(initial: bool) -> Self {
        Self(initial)
    }

    pub const fn value(self) -> bool {
        self.0
    }

    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }

    pub fn set_on(&mut self) {
        self.0 = true;
    }

    pub fn set_off(&mut self) {
        self.0 = false;
    }
}

impl From<bool> for Toggle {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<Toggle> for bool {
    fn from(toggle: Toggle) -> Self {
        toggle.0
    }
}
