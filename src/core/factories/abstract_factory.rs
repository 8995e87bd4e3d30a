use super::traits::PeripheralFactory;
use crate::core::errors::CreationError;
use crate::core::products::{GameKeyboard, GameMouse, Keyboard, Mouse, OfficeKeyboard, OfficeMouse};
use crate::core::types::PeripheralFamily;
use log::debug;

/// Factory for the office keyboard and mouse
#[derive(Debug, Clone, Copy, Default)]
pub struct OfficeFactory;

/// Factory for the game keyboard and mouse
#[derive(Debug, Clone, Copy, Default)]
pub struct GameFactory;

impl PeripheralFactory for OfficeFactory {
    fn family(&self) -> PeripheralFamily {
        PeripheralFamily::Office
    }

    fn keyboard(&self) -> Box<dyn Keyboard> {
        Box::new(OfficeKeyboard)
    }

    fn mouse(&self) -> Box<dyn Mouse> {
        Box::new(OfficeMouse)
    }
}

impl PeripheralFactory for GameFactory {
    fn family(&self) -> PeripheralFamily {
        PeripheralFamily::Game
    }

    fn keyboard(&self) -> Box<dyn Keyboard> {
        Box::new(GameKeyboard)
    }

    fn mouse(&self) -> Box<dyn Mouse> {
        Box::new(GameMouse)
    }
}

/// A keyboard and mouse taken from the same factory
pub struct PeripheralSet {
    pub keyboard: Box<dyn Keyboard>,
    pub mouse: Box<dyn Mouse>,
}

impl PeripheralSet {
    /// Take both parts from one factory
    pub fn from_factory(factory: &dyn PeripheralFactory) -> Self {
        debug!("[PeripheralFactory:{}] assembling set", factory.family());
        Self {
            keyboard: factory.keyboard(),
            mouse: factory.mouse(),
        }
    }

    /// Whether both parts belong to the same family
    pub fn is_matched(&self) -> bool {
        self.keyboard.family() == self.mouse.family()
    }

    pub fn family(&self) -> PeripheralFamily {
        self.keyboard.family()
    }
}

/// Select a peripheral factory by family key (`"office"` or `"game"`)
pub fn peripheral_factory(family: &str) -> Result<Box<dyn PeripheralFactory>, CreationError> {
    match family.parse::<PeripheralFamily>()? {
        PeripheralFamily::Office => Ok(Box::new(OfficeFactory)),
        PeripheralFamily::Game => Ok(Box::new(GameFactory)),
    }
}
