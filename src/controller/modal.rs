/// Full-page loader shown while the image preview goes fullscreen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Loader {
    Absent,
    /// In the tree at opacity 0.
    Mounted,
    Shown,
    Fading,
}

/// Image preview modal. Timer callbacks carry the generation they were armed
/// with; a close bumps the generation so stale timers do nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct ImagePreview {
    pub open: bool,
    pub loader: Loader,
    generation: u32,
}

impl Default for ImagePreview {
    fn default() -> Self {
        Self {
            open: false,
            loader: Loader::Absent,
            generation: 0,
        }
    }
}

impl ImagePreview {
    /// Mounts the loader. Returns the generation for the follow-up timers, or
    /// `None` if a preview is already under way.
    pub fn begin(&mut self) -> Option<u32> {
        if self.open || self.loader != Loader::Absent {
            return None;
        }
        self.loader = Loader::Mounted;
        Some(self.generation)
    }

    pub fn show_loader(&mut self, generation: u32) -> bool {
        if generation != self.generation || self.loader != Loader::Mounted {
            return false;
        }
        self.loader = Loader::Shown;
        true
    }

    pub fn open(&mut self, generation: u32) -> bool {
        if generation != self.generation || self.loader == Loader::Absent || self.open {
            return false;
        }
        self.open = true;
        self.loader = Loader::Fading;
        true
    }

    pub fn drop_loader(&mut self, generation: u32) -> bool {
        if generation != self.generation || self.loader != Loader::Fading {
            return false;
        }
        self.loader = Loader::Absent;
        true
    }

    /// Closes the preview and discards any loader. Returns `true` if there was
    /// anything to close.
    pub fn close(&mut self) -> bool {
        let had_something = self.open || self.loader != Loader::Absent;
        self.open = false;
        self.loader = Loader::Absent;
        self.generation = self.generation.wrapping_add(1);
        had_something
    }
}
