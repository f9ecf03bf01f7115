use crate::evaluation::preview::MeanSample;

/// Full sample sequence of one run, in emission order.
pub struct MeanCurve {
    entries: Vec<MeanSample>,
}

impl MeanCurve {
    pub fn push(&mut self, sample: MeanSample) {
        self.entries.push(sample)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<MeanSample> {
        self.entries.last().copied()
    }

    pub fn samples(&self) -> &[MeanSample] {
        &self.entries
    }
}

impl Default for MeanCurve {
    fn default() -> Self {
        Self { entries: vec![] }
    }
}
