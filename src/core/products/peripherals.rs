use crate::core::types::PeripheralFamily;

/// Keyboard half of a peripheral set
pub trait Keyboard: Send + Sync {
    fn family(&self) -> PeripheralFamily;

    /// Type the given text and describe the keystrokes
    fn input(&self, text: &str) -> String;
}

/// Mouse half of a peripheral set
pub trait Mouse: Send + Sync {
    fn family(&self) -> PeripheralFamily;

    fn click(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OfficeKeyboard;

#[derive(Debug, Clone, Copy, Default)]
pub struct GameKeyboard;

#[derive(Debug, Clone, Copy, Default)]
pub struct OfficeMouse;

#[derive(Debug, Clone, Copy, Default)]
pub struct GameMouse;

impl Keyboard for OfficeKeyboard {
    fn family(&self) -> PeripheralFamily {
        PeripheralFamily::Office
    }

    fn input(&self, text: &str) -> String {
        format!("[office keyboard] quiet typing: {}", text)
    }
}

impl Keyboard for GameKeyboard {
    fn family(&self) -> PeripheralFamily {
        PeripheralFamily::Game
    }

    fn input(&self, text: &str) -> String {
        format!("[game keyboard] rgb keystrokes: {}", text)
    }
}

impl Mouse for OfficeMouse {
    fn family(&self) -> PeripheralFamily {
        PeripheralFamily::Office
    }

    fn click(&self) -> String {
        "[office mouse] click".to_string()
    }
}

impl Mouse for GameMouse {
    fn family(&self) -> PeripheralFamily {
        PeripheralFamily::Game
    }

    fn click(&self) -> String {
        "[game mouse] rapid click".to_string()
    }
}
