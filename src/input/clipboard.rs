use super::LoadError;
use std::cell::RefCell;
use std::rc::Rc;

/// Read/write access to a clipboard.
pub trait Clipboard {
    fn get_text(&mut self) -> Result<String, LoadError>;

    fn set_text(&mut self, text: &str) -> Result<(), LoadError>;
}

/// The desktop clipboard via `arboard`.
///
/// The handle is opened on first use and kept alive afterwards; on X11 the
/// copied text disappears once the owning handle is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, LoadError> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        self.inner
            .as_mut()
            .ok_or_else(|| LoadError::Clipboard("clipboard unavailable".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Result<String, LoadError> {
        let text = self
            .handle()?
            .get_text()
            .map_err(|e| LoadError::Clipboard(e.to_string()))?;

        if text.trim().is_empty() {
            return Err(LoadError::EmptyInput("clipboard".to_string()));
        }
        Ok(text)
    }

    fn set_text(&mut self, text: &str) -> Result<(), LoadError> {
        self.handle()?
            .set_text(text)
            .map_err(|e| LoadError::Clipboard(e.to_string()))
    }
}

/// In-process clipboard. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Rc<RefCell<Option<String>>>,
    unavailable: bool,
}

impl MemoryClipboard {
    pub fn with_text(text: &str) -> Self {
        let clipboard = Self::default();
        clipboard.contents.replace(Some(text.to_string()));
        clipboard
    }

    /// A clipboard whose every operation fails.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Result<String, LoadError> {
        if self.unavailable {
            return Err(LoadError::Clipboard("clipboard unavailable".to_string()));
        }

        match self.contents() {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(LoadError::EmptyInput("clipboard".to_string())),
        }
    }

    fn set_text(&mut self, text: &str) -> Result<(), LoadError> {
        if self.unavailable {
            return Err(LoadError::Clipboard("clipboard unavailable".to_string()));
        }

        self.contents.replace(Some(text.to_string()));
        Ok(())
    }
}
