// Single-slot memoization keyed by the inputs of a pure computation.
//
// The cached value is recomputed only when the key differs from the last one.

#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    slot: Option<(K, V)>,
    misses: u64,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            slot: None,
            misses: 0,
        }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> &V {
        let entry = match self.slot.take() {
            Some((cached, value)) if cached == key => (cached, value),
            _ => {
                self.misses += 1;
                let value = compute(&key);
                (key, value)
            }
        };
        &self.slot.insert(entry).1
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
