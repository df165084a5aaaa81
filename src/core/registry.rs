// Live mounts keyed by the element id they were mounted on.

/// At most one value per id. Inserting on a taken id hands the previous value
/// back, so the caller decides when its teardown (on drop) runs.
#[derive(Debug)]
pub struct MountRegistry<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for MountRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MountRegistry<T> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, id: &str, value: T) -> Option<T> {
        match self.entries.iter_mut().find(|(key, _)| key == id) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((id.to_owned(), value));
                None
            }
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.entries.iter().position(|(key, _)| key == id)?;
        Some(self.entries.remove(index).1)
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
