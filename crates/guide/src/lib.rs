//! Guide table for indexed search over cumulative areas.
//!
//! The table splits `[0, total)` into equally wide slots. Each slot stores the first
//! entry whose cumulative area reaches the slot's lower edge, so a lookup only has to
//! walk forward a short distance on average.

#[derive(Debug, Clone, PartialEq)]
pub struct GuideTable<H> {
    slots: Vec<H>,
    total: f64,
}

impl<H> Default for GuideTable<H> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            total: 0.0,
        }
    }
}

impl<H: Copy> GuideTable<H> {
    /// Builds a table with `size` slots (at least one) from `(handle, cumulative area)`
    /// pairs given in list order.
    ///
    /// Returns `None` if `entries` is empty. The cursor over `entries` never moves
    /// backwards, so construction is linear in `entries + size`.
    pub fn build<I>(entries: I, size: usize) -> Option<Self>
    where
        I: IntoIterator<Item = (H, f64)>,
    {
        let entries: Vec<(H, f64)> = entries.into_iter().collect();
        let &(_, total) = entries.last()?;

        let size = size.max(1);
        let step = total / size as f64;

        let mut slots = Vec::with_capacity(size);
        let mut cursor = 0;
        for j in 0..size {
            let edge = j as f64 * step;
            while entries[cursor].1 < edge {
                if cursor + 1 == entries.len() {
                    // round-off: remaining slots use the last entry
                    break;
                }
                cursor += 1;
            }
            slots.push(entries[cursor].0);
        }

        Some(Self { slots, total })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    #[must_use]
    pub fn slots(&self) -> &[H] {
        &self.slots
    }

    /// First entry to inspect for `u` in `[0, 1)`.
    #[must_use]
    pub fn start(&self, u: f64) -> H {
        let idx = (u * self.slots.len() as f64) as usize;
        self.slots[idx.min(self.slots.len() - 1)]
    }

    /// Finds the entry whose cumulative range contains `u * total`.
    ///
    /// `acum` returns the cumulative area of a handle and `next` its successor. Returns the
    /// handle together with the scaled area `u * total`.
    pub fn locate<A, N>(&self, u: f64, acum: A, next: N) -> (H, f64)
    where
        A: Fn(H) -> f64,
        N: Fn(H) -> Option<H>,
    {
        let target = u * self.total;
        let mut h = self.start(u);
        while acum(h) < target {
            match next(h) {
                Some(n) => h = n,
                None => break,
            }
        }
        (h, target)
    }
}
